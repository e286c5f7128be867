/// The presentation-level API of a .pptx package.
use crate::ooxml::error::Result;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::pptx::parts::{PresentationPart, SlideMasterPart, SlidePart};
use crate::ooxml::pptx::slide::{Slide, SlideLayout, SlideMaster};

/// A PowerPoint presentation, read-only.
///
/// Obtained from [`Package::presentation`](super::Package::presentation).
/// Everything is parsed on demand from the underlying parts.
pub struct Presentation<'a> {
    part: PresentationPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    #[inline]
    pub(crate) fn new(part: PresentationPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    pub fn slide_count(&self) -> Result<usize> {
        self.part.slide_count()
    }

    /// Slide width in EMUs.
    pub fn slide_width(&self) -> Result<Option<i64>> {
        self.part.slide_width()
    }

    /// Slide height in EMUs.
    pub fn slide_height(&self) -> Result<Option<i64>> {
        self.part.slide_height()
    }

    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        self.part.slide_size()
    }

    /// Slides in presentation order (`sldIdLst` order, not partname order).
    pub fn slides(&self) -> Result<Vec<Slide<'a>>> {
        let pres_part = self.part.part();
        let slide_rids = self.part.slide_rids()?;
        let mut slides = Vec::with_capacity(slide_rids.len());

        for rid in slide_rids {
            let related = self.package.related_part(pres_part, &rid)?;
            slides.push(Slide::new(SlidePart::from_part(related)?, self.package));
        }

        Ok(slides)
    }

    pub fn slide(&self, index: usize) -> Result<Option<Slide<'a>>> {
        Ok(self.slides()?.into_iter().nth(index))
    }

    pub fn slide_masters(&self) -> Result<Vec<SlideMaster<'a>>> {
        let pres_part = self.part.part();
        let master_rids = self.part.slide_master_rids()?;
        let mut masters = Vec::with_capacity(master_rids.len());

        for rid in master_rids {
            let related = self.package.related_part(pres_part, &rid)?;
            masters.push(SlideMaster::new(
                SlideMasterPart::from_part(related)?,
                self.package,
            ));
        }

        Ok(masters)
    }

    /// Layouts of the first slide master, in its `sldLayoutIdLst` order.
    ///
    /// Empty when the presentation has no master.
    pub fn slide_layouts(&self) -> Result<Vec<SlideLayout<'a>>> {
        match self.slide_masters()?.first() {
            Some(master) => master.slide_layouts(),
            None => Ok(Vec::new()),
        }
    }

    #[inline]
    pub fn part(&self) -> &PresentationPart<'a> {
        &self.part
    }

    #[inline]
    pub fn package(&self) -> &'a OpcPackage {
        self.package
    }
}
