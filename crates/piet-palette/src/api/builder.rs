//! PietMapper builder -- the entry point for the whole pipeline.

use crate::api::MapError;
use crate::classify::HueBuckets;
use crate::cluster::ClusterSet;
use crate::color::Rgb;
use crate::output::RemappedImage;
use crate::palette::{PietPalette, PIET_COLORS_COUNT, PIET_PALETTE};
use crate::remap::{check_dimensions, ColorMapping};
use crate::report::{Reporter, Stage, ThresholdHint};

/// Default per-channel tolerance for color discovery.
pub const DEFAULT_DIFF_THRESHOLD: u32 = 10;

/// Default dominance margin for hue classification.
pub const DEFAULT_LEVEL_THRESHOLD: u32 = 10;

/// Maps the colors of a Piet image onto the canonical palette.
///
/// Configuration methods consume and return `self`; [`map()`](Self::map)
/// and [`analyze()`](Self::analyze) take `&self`, so one mapper can process
/// any number of images.
///
/// # Example
///
/// ```
/// use piet_palette::{NullReporter, PietMapper, PIET_PALETTE};
///
/// let pixels: Vec<_> = PIET_PALETTE.entries().map(|e| e.color).collect();
/// let image = PietMapper::new()
///     .diff_threshold(10)
///     .level_threshold(10)
///     .map(&pixels, 20, 1, &mut NullReporter)
///     .unwrap();
///
/// assert_eq!(image.pixels(), &pixels[..]);
/// ```
#[derive(Debug, Clone)]
pub struct PietMapper {
    diff_threshold: u32,
    level_threshold: u32,
    verbose: bool,
    palette: PietPalette,
}

impl PietMapper {
    /// Mapper with default thresholds (10 / 10), not verbose.
    pub fn new() -> Self {
        Self {
            diff_threshold: DEFAULT_DIFF_THRESHOLD,
            level_threshold: DEFAULT_LEVEL_THRESHOLD,
            verbose: false,
            palette: PIET_PALETTE,
        }
    }

    /// Maximum per-channel difference for a pixel to join a color.
    #[inline]
    pub fn diff_threshold(mut self, threshold: u32) -> Self {
        self.diff_threshold = threshold;
        self
    }

    /// Margin within which a channel counts as dominant. Must be >= 1.
    #[inline]
    pub fn level_threshold(mut self, threshold: u32) -> Self {
        self.level_threshold = threshold;
        self
    }

    /// Emit a full family listing after association.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Discover, classify, order and associate the colors of `pixels`.
    ///
    /// Stops at the first failed validation; see [`MapError`].
    pub fn analyze(
        &self,
        pixels: &[Rgb],
        reporter: &mut dyn Reporter,
    ) -> Result<ColorMapping, MapError> {
        if self.level_threshold == 0 {
            return Err(MapError::InvalidLevelThreshold);
        }

        reporter.stage_started(Stage::Enumerating);
        let mut clusters = ClusterSet::from_samples(pixels.iter().copied(), self.diff_threshold);
        let found = clusters.len();
        if found != PIET_COLORS_COUNT {
            let hint = ThresholdHint::for_count(found, PIET_COLORS_COUNT);
            reporter.count_mismatch(found, PIET_COLORS_COUNT, hint);
            return Err(MapError::ColorCountMismatch {
                found,
                expected: PIET_COLORS_COUNT,
                hint,
            });
        }
        reporter.colors_found(found);
        reporter.done(Stage::Enumerating);

        reporter.stage_started(Stage::HueSorting);
        let mut buckets = HueBuckets::classify(&mut clusters, self.level_threshold);
        if let Err(mismatches) = buckets.validate() {
            for mismatch in &mismatches {
                reporter.hue_mismatch(mismatch);
            }
            reporter.hue_dump(&buckets.families(&clusters));
            return Err(MapError::HueSorting { mismatches });
        }
        reporter.done(Stage::HueSorting);

        reporter.stage_started(Stage::LightnessSorting);
        buckets.sort_by_lightness(&clusters);
        reporter.done(Stage::LightnessSorting);

        reporter.stage_started(Stage::Associating);
        buckets.associate(&mut clusters, &self.palette);
        if self.verbose {
            reporter.hue_dump(&buckets.families(&clusters));
        }
        reporter.done(Stage::Associating);

        Ok(ColorMapping::new(clusters, buckets))
    }

    /// Run the full pipeline and return the remapped grid.
    ///
    /// `pixels` is row-major and must hold exactly `width * height` samples.
    pub fn map(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
        reporter: &mut dyn Reporter,
    ) -> Result<RemappedImage, MapError> {
        check_dimensions(pixels, width, height)?;
        let mapping = self.analyze(pixels, reporter)?;

        reporter.stage_started(Stage::Remapping);
        let image = mapping.remap(pixels, width, height)?;
        reporter.done(Stage::Remapping);
        Ok(image)
    }
}

impl Default for PietMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{FamilyListing, HueMismatch};
    use crate::color::Hue;

    #[derive(Debug, PartialEq)]
    enum Event {
        Started(Stage),
        Found(usize),
        CountMismatch(usize, ThresholdHint),
        HueMismatch(Hue, usize),
        Dump(Vec<usize>),
        Done(Stage),
    }

    #[derive(Default)]
    struct Recorder(Vec<Event>);

    impl Reporter for Recorder {
        fn stage_started(&mut self, stage: Stage) {
            self.0.push(Event::Started(stage));
        }
        fn colors_found(&mut self, count: usize) {
            self.0.push(Event::Found(count));
        }
        fn count_mismatch(&mut self, found: usize, _expected: usize, hint: ThresholdHint) {
            self.0.push(Event::CountMismatch(found, hint));
        }
        fn hue_mismatch(&mut self, mismatch: &HueMismatch) {
            self.0.push(Event::HueMismatch(mismatch.hue, mismatch.found));
        }
        fn hue_dump(&mut self, families: &[FamilyListing<'_>]) {
            self.0
                .push(Event::Dump(families.iter().map(|f| f.clusters.len()).collect()));
        }
        fn done(&mut self, stage: Stage) {
            self.0.push(Event::Done(stage));
        }
    }

    fn canonical_strip() -> Vec<Rgb> {
        PIET_PALETTE.entries().map(|e| e.color).collect()
    }

    #[test]
    fn test_successful_run_event_sequence() {
        let mut recorder = Recorder::default();
        let pixels = canonical_strip();
        PietMapper::new()
            .map(&pixels, 20, 1, &mut recorder)
            .unwrap();
        assert_eq!(
            recorder.0,
            vec![
                Event::Started(Stage::Enumerating),
                Event::Found(20),
                Event::Done(Stage::Enumerating),
                Event::Started(Stage::HueSorting),
                Event::Done(Stage::HueSorting),
                Event::Started(Stage::LightnessSorting),
                Event::Done(Stage::LightnessSorting),
                Event::Started(Stage::Associating),
                Event::Done(Stage::Associating),
                Event::Started(Stage::Remapping),
                Event::Done(Stage::Remapping),
            ]
        );
    }

    #[test]
    fn test_verbose_dumps_after_association() {
        let mut recorder = Recorder::default();
        PietMapper::new()
            .verbose(true)
            .analyze(&canonical_strip(), &mut recorder)
            .unwrap();
        let dump_at = recorder
            .0
            .iter()
            .position(|e| matches!(e, Event::Dump(_)))
            .unwrap();
        assert_eq!(recorder.0[dump_at - 1], Event::Started(Stage::Associating));
        assert_eq!(recorder.0[dump_at], Event::Dump(vec![1, 3, 3, 3, 3, 3, 3, 1]));
    }

    #[test]
    fn test_count_mismatch_stops_before_classification() {
        let mut recorder = Recorder::default();
        let pixels = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        let err = PietMapper::new()
            .analyze(&pixels, &mut recorder)
            .unwrap_err();
        assert_eq!(
            err,
            MapError::ColorCountMismatch {
                found: 2,
                expected: 20,
                hint: ThresholdHint::Decrease
            }
        );
        assert_eq!(
            recorder.0,
            vec![
                Event::Started(Stage::Enumerating),
                Event::CountMismatch(2, ThresholdHint::Decrease),
            ]
        );
    }

    #[test]
    fn test_hue_sorting_failure_reports_all_then_dumps() {
        // Swap dark blue for a second dark red: 20 colors, wrong families
        let mut pixels = canonical_strip();
        pixels[1] = Rgb::new(160, 0, 0);
        let mut recorder = Recorder::default();
        let err = PietMapper::new()
            .analyze(&pixels, &mut recorder)
            .unwrap_err();

        let MapError::HueSorting { mismatches } = err else {
            panic!("expected hue sorting error, got {err:?}");
        };
        assert_eq!(mismatches.len(), 2);
        assert!(recorder.0.contains(&Event::HueMismatch(Hue::Blue, 2)));
        assert!(recorder.0.contains(&Event::HueMismatch(Hue::Red, 4)));
        assert_eq!(
            recorder.0.last(),
            Some(&Event::Dump(vec![1, 2, 3, 3, 4, 3, 3, 1]))
        );
    }

    #[test]
    fn test_zero_level_threshold_rejected() {
        let err = PietMapper::new()
            .level_threshold(0)
            .analyze(&canonical_strip(), &mut crate::report::NullReporter)
            .unwrap_err();
        assert_eq!(err, MapError::InvalidLevelThreshold);
    }

    #[test]
    fn test_map_rejects_bad_dimensions() {
        let err = PietMapper::new()
            .map(&canonical_strip(), 21, 1, &mut crate::report::NullReporter)
            .unwrap_err();
        assert!(matches!(err, MapError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_too_many_colors_hint() {
        let mut pixels = canonical_strip();
        pixels.push(Rgb::new(128, 128, 128));
        let err = PietMapper::new()
            .analyze(&pixels, &mut crate::report::NullReporter)
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::ColorCountMismatch {
                found: 21,
                hint: ThresholdHint::Increase,
                ..
            }
        ));
    }
}
