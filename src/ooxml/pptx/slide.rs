/// Slide-related objects, including Slide, SlideLayout, and SlideMaster.
use crate::ooxml::error::Result;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::parts::{SlideLayoutPart, SlideMasterPart, SlidePart};
use crate::ooxml::pptx::shapes::base::BaseShape;

/// A slide in a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use deckhand::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// for slide in pres.slides()?.iter() {
///     for shape in slide.shapes()? {
///         println!("{} {:?}", shape.kind(), shape.text()?);
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Slide<'a> {
    part: SlidePart<'a>,
    /// Needed to follow the slide's relationships
    package: &'a OpcPackage,
}

impl<'a> Slide<'a> {
    #[inline]
    pub(crate) fn new(part: SlidePart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// Internal name from `<p:cSld>`; usually empty for slides.
    pub fn name(&self) -> Result<String> {
        self.part.name()
    }

    /// Shapes in document order.
    pub fn shapes(&self) -> Result<Vec<BaseShape>> {
        self.part.shapes()
    }

    pub fn shape_count(&self) -> Result<usize> {
        Ok(self.shapes()?.len())
    }

    /// Text of every text-bearing shape, one shape per line.
    pub fn text(&self) -> Result<String> {
        let mut texts = Vec::new();
        for shape in self.shapes()? {
            if let Some(text) = shape.text()?
                && !text.is_empty()
            {
                texts.push(text);
            }
        }
        Ok(texts.join("\n"))
    }

    /// The slide's own background; `None` when it inherits from its layout.
    pub fn background(&self) -> Result<Option<SlideBackground>> {
        self.part.background()
    }

    /// The layout this slide is based on.
    pub fn slide_layout(&self) -> Result<Option<SlideLayout<'a>>> {
        let part = self.part.part();
        match part.rels().first_of_type(rt::SLIDE_LAYOUT) {
            Some(rel) => {
                let layout = self.package.related_part(part, rel.r_id())?;
                Ok(Some(SlideLayout::new(SlideLayoutPart::from_part(layout)?)))
            },
            None => Ok(None),
        }
    }

    #[inline]
    pub fn part(&self) -> &SlidePart<'a> {
        &self.part
    }
}

/// A slide layout.
pub struct SlideLayout<'a> {
    part: SlideLayoutPart<'a>,
}

impl<'a> SlideLayout<'a> {
    #[inline]
    pub(crate) fn new(part: SlideLayoutPart<'a>) -> Self {
        Self { part }
    }

    pub fn name(&self) -> Result<String> {
        self.part.name()
    }

    pub fn background(&self) -> Result<Option<SlideBackground>> {
        self.part.background()
    }

    #[inline]
    pub fn part(&self) -> &SlideLayoutPart<'a> {
        &self.part
    }
}

/// A slide master and the layouts it owns.
pub struct SlideMaster<'a> {
    part: SlideMasterPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> SlideMaster<'a> {
    #[inline]
    pub(crate) fn new(part: SlideMasterPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    pub fn name(&self) -> Result<String> {
        self.part.name()
    }

    /// Layouts in `sldLayoutIdLst` order.
    pub fn slide_layouts(&self) -> Result<Vec<SlideLayout<'a>>> {
        let master = self.part.part();
        let rids = self.part.slide_layout_rids()?;
        let mut layouts = Vec::with_capacity(rids.len());
        for rid in rids {
            let part = self.package.related_part(master, &rid)?;
            layouts.push(SlideLayout::new(SlideLayoutPart::from_part(part)?));
        }
        Ok(layouts)
    }

    pub fn background(&self) -> Result<Option<SlideBackground>> {
        self.part.background()
    }

    #[inline]
    pub fn part(&self) -> &SlideMasterPart<'a> {
        &self.part
    }
}
