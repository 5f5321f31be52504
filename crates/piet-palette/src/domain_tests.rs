//! Domain-critical regression tests for piet-palette.
//!
//! Each test documents the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::api::{MapError, PietMapper};
    use crate::classify::{classify_color, HueBuckets};
    use crate::cluster::{Cluster, ClusterSet};
    use crate::color::{Hue, Lightness, Rgb};
    use crate::palette::{PIET_COLORS_COUNT, PIET_PALETTE};
    use crate::report::{NullReporter, ThresholdHint};

    /// Canonical colors in palette order, each repeated `run` times.
    fn canonical_runs(run: usize) -> Vec<Rgb> {
        PIET_PALETTE
            .entries()
            .flat_map(|e| std::iter::repeat(e.color).take(run))
            .collect()
    }

    /// Shift every channel by up to `amount` in either direction.
    fn jitter(color: Rgb, amount: i32, rng: &mut StdRng) -> Rgb {
        Rgb::new(
            shift(color.r, amount, rng),
            shift(color.g, amount, rng),
            shift(color.b, amount, rng),
        )
    }

    fn shift(value: u8, amount: i32, rng: &mut StdRng) -> u8 {
        (i32::from(value) + rng.gen_range(-amount..=amount)).clamp(0, 255) as u8
    }

    /// Jitter only channels below 255, so the normal and light grades keep
    /// tying at level 255 and discovery order decides between them.
    fn jitter_unsaturated(color: Rgb, amount: i32, rng: &mut StdRng) -> Rgb {
        let jittered = jitter(color, amount, rng);
        let pick = |orig: u8, new: u8| if orig == u8::MAX { orig } else { new };
        Rgb::new(
            pick(color.r, jittered.r),
            pick(color.g, jittered.g),
            pick(color.b, jittered.b),
        )
    }

    // ========================================================================
    // Remapping is a fixed point
    // ========================================================================

    /// If this breaks, it means: remapped output no longer clusters back to
    /// exactly the canonical palette, so rerunning the tool on its own output
    /// would change the image (or fail).
    #[test]
    fn test_remap_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x9137);
        let (width, height) = (20, 6);
        let pixels: Vec<Rgb> = canonical_runs(height)
            .into_iter()
            .map(|c| jitter_unsaturated(c, 4, &mut rng))
            .collect();
        // One column per color, so every row lists the palette in order
        let mut grid = vec![Rgb::default(); width * height];
        for (i, &p) in pixels.iter().enumerate() {
            let (column, row) = (i / height, i % height);
            grid[row * width + column] = p;
        }

        let mapper = PietMapper::new();
        let first = mapper.map(&grid, width, height, &mut NullReporter).unwrap();
        let second = mapper
            .map(first.pixels(), width, height, &mut NullReporter)
            .unwrap();
        assert_eq!(first, second);

        let mapping = mapper.analyze(first.pixels(), &mut NullReporter).unwrap();
        assert_eq!(mapping.clusters().len(), PIET_COLORS_COUNT);
        for cluster in mapping.clusters() {
            assert_eq!(cluster.reference(), Some(cluster.average()));
        }
    }

    // ========================================================================
    // Count invariant under jitter
    // ========================================================================

    /// If this breaks, it means: the clusterer is splitting or merging
    /// samples that lie within tolerance of one canonical color.
    ///
    /// Jitter stays within half the diff threshold so that any two samples
    /// of the same color are within the threshold of each other, and so of
    /// any running average built from them.
    #[test]
    fn test_jittered_palette_yields_twenty_clusters() {
        let mut rng = StdRng::seed_from_u64(42);
        for diff in [4u32, 10, 20] {
            let amount = (diff / 2) as i32;
            let mut pixels: Vec<Rgb> = canonical_runs(16)
                .into_iter()
                .map(|c| jitter(c, amount, &mut rng))
                .collect();
            // Interleave colors so clusters grow concurrently
            pixels.reverse();
            pixels.rotate_left(37);

            let set = ClusterSet::from_samples(pixels.iter().copied(), diff);
            assert_eq!(set.len(), PIET_COLORS_COUNT, "diff {diff}");
            assert!(set.iter().all(|c| c.weight() == 16), "diff {diff}");
        }
    }

    // ========================================================================
    // Hue classification of the canonical palette
    // ========================================================================

    /// If this breaks, it means: a canonical color is classified into the
    /// wrong family, or its level no longer orders it into its grade.
    #[test]
    fn test_each_canonical_color_maps_to_its_slot() {
        for entry in PIET_PALETTE.entries() {
            let classification = classify_color(entry.color, 10);
            assert_eq!(classification.family, entry.hue, "{}", entry.color);

            if let Some(lightness) = entry.lightness {
                let levels: Vec<u32> = Lightness::ALL
                    .iter()
                    .map(|&l| classify_color(PIET_PALETTE.color(entry.hue, l), 10).level)
                    .collect();
                // Position after a stable ascending sort in palette order
                let rank = levels
                    .iter()
                    .enumerate()
                    .filter(|&(i, &level)| {
                        level < classification.level
                            || (level == classification.level && i < lightness.index())
                    })
                    .count();
                assert_eq!(rank, lightness.index(), "{}", entry.color);
            }
        }
    }

    /// If this breaks, it means: the full classifier, sorter and associator
    /// chain no longer binds the canonical palette to itself.
    #[test]
    fn test_canonical_strip_binds_to_itself() {
        let mut clusters = ClusterSet::from_samples(canonical_runs(1), 10);
        let mut buckets = HueBuckets::classify(&mut clusters, 10);
        buckets.validate().unwrap();
        buckets.sort_by_lightness(&clusters);
        buckets.associate(&mut clusters, &PIET_PALETTE);

        for hue in Hue::CHROMATIC {
            for (grade, &index) in buckets.get(hue).iter().enumerate() {
                assert_eq!(
                    clusters.get(index).and_then(Cluster::reference),
                    PIET_PALETTE.get(hue, grade)
                );
            }
        }
    }

    // ========================================================================
    // Black and white are told apart
    // ========================================================================

    /// If this breaks, it means: dark and light greys both land in the
    /// white family because all three channels dominate in both.
    #[test]
    fn test_black_white_disambiguation() {
        assert_eq!(classify_color(Rgb::new(10, 10, 10), 10).family, Hue::Black);
        assert_eq!(
            classify_color(Rgb::new(245, 245, 245), 10).family,
            Hue::White
        );
    }

    // ========================================================================
    // Merge arithmetic
    // ========================================================================

    /// If this breaks, it means: the running average is rounded differently
    /// or recomputed from scratch, which shifts cluster membership.
    #[test]
    fn test_merge_arithmetic() {
        let set = ClusterSet::from_samples([Rgb::new(100, 100, 100), Rgb::new(102, 100, 100)], 2);
        assert_eq!(set.len(), 1);
        let cluster = set.get(0).unwrap();
        assert_eq!(cluster.average(), Rgb::new(101, 100, 100));
        assert_eq!(cluster.weight(), 2);
    }

    // ========================================================================
    // End-to-end scenarios
    // ========================================================================

    /// If this breaks, it means: a two-color image is no longer rejected
    /// before classification, or the error loses its count.
    #[test]
    fn test_two_color_image_is_rejected() {
        let pixels = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
        ];
        let result = PietMapper::new()
            .diff_threshold(10)
            .map(&pixels, 2, 2, &mut NullReporter);
        assert_eq!(
            result,
            Err(MapError::ColorCountMismatch {
                found: 2,
                expected: 20,
                hint: ThresholdHint::Decrease,
            })
        );
    }

    /// If this breaks, it means: a clean image is altered by the tool.
    #[test]
    fn test_clean_strip_is_unchanged() {
        let pixels = canonical_runs(1);
        let image = PietMapper::new()
            .diff_threshold(10)
            .level_threshold(10)
            .map(&pixels, 20, 1, &mut NullReporter)
            .unwrap();
        assert_eq!(image.pixels(), &pixels[..]);
        assert_eq!(image.width(), 20);
        assert_eq!(image.height(), 1);
    }

    // ========================================================================
    // First-match approximation
    // ========================================================================

    /// If this breaks, it means: clustering switched to nearest-match, which
    /// changes membership and downstream counts on noisy input.
    #[test]
    fn test_first_match_is_kept_on_overlapping_clusters() {
        let set = ClusterSet::from_samples(
            [
                Rgb::new(200, 0, 0),
                Rgb::new(215, 0, 0),
                Rgb::new(209, 0, 0),
            ],
            10,
        );
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().weight(), 2);
        assert_eq!(set.get(1).unwrap().weight(), 1);
    }
}
