//! Act 1 layout: a row of platforms and a row of knowledge scrolls

use rand::Rng;

use super::entity::{KnowledgeScroll, Platform};
use crate::consts::*;
use crate::error::{LevelError, Result};

/// Minimum quotation list length Act 1 can be built from
pub const fn required_quotes() -> usize {
    ACT1_QUOTE_OFFSET + ACT1_SCROLL_COUNT as usize
}

/// Append Act 1's platforms and scrolls to the given collections.
///
/// Platforms go first, evenly spaced from x=500 every 800 units, each raised
/// a random 0..=150 above `screen_height - 200`. Scrolls follow at x=800 every
/// 1200 units, fixed at `screen_height - 350`, reading `quotes[7]` and
/// `quotes[8]`.
///
/// Fails with [`LevelError::IndexOutOfRange`] when `quotes` is too short; in
/// that case neither collection is touched and no randomness is consumed.
pub fn populate_act_one<Q, R>(
    screen_height: i32,
    platforms: &mut Vec<Platform>,
    scrolls: &mut Vec<KnowledgeScroll>,
    quotes: &[Q],
    rng: &mut R,
) -> Result<()>
where
    Q: AsRef<str>,
    R: Rng + ?Sized,
{
    // Resolve quotations up front so a short list fails before any append
    let texts = (0..ACT1_SCROLL_COUNT as usize)
        .map(|i| {
            let index = i + ACT1_QUOTE_OFFSET;
            quotes
                .get(index)
                .map(|q| q.as_ref())
                .ok_or(LevelError::IndexOutOfRange {
                    index,
                    len: quotes.len(),
                })
        })
        .collect::<Result<Vec<&str>>>()?;

    for i in 0..ACT1_PLATFORM_COUNT {
        let x = ACT1_PLATFORM_START_X + i * ACT1_PLATFORM_SPACING;
        let jitter = rng.random_range(0..=ACT1_PLATFORM_JITTER);
        let y = screen_height - ACT1_PLATFORM_BASE_OFFSET - jitter;
        log::debug!("Act 1 platform {} at ({}, {})", i, x, y);
        platforms.push(Platform::standard(x, y));
    }

    for (i, text) in texts.into_iter().enumerate() {
        let x = ACT1_SCROLL_START_X + i as i32 * ACT1_SCROLL_SPACING;
        let y = screen_height - ACT1_SCROLL_OFFSET;
        log::debug!("Act 1 scroll {} at ({}, {}): {}", i, x, y, text);
        scrolls.push(KnowledgeScroll::new(x, y, text));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn nine_quotes() -> Vec<&'static str> {
        vec![
            "q0",
            "q1",
            "q2",
            "q3",
            "q4",
            "q5",
            "q6",
            "To be, or not to be",
            "Though this be madness",
        ]
    }

    #[test]
    fn test_act_one_example_layout() {
        let mut platforms = Vec::new();
        let mut scrolls = Vec::new();
        let mut rng = Pcg32::seed_from_u64(12345);

        populate_act_one(1000, &mut platforms, &mut scrolls, &nine_quotes(), &mut rng).unwrap();

        assert_eq!(platforms.len(), 3);
        let xs: Vec<i32> = platforms.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![500, 1300, 2100]);
        for p in &platforms {
            assert!((650..=800).contains(&p.y()), "y = {}", p.y());
            assert_eq!((p.width, p.height), (250, 20));
        }

        assert_eq!(
            scrolls,
            vec![
                KnowledgeScroll::new(800, 650, "To be, or not to be"),
                KnowledgeScroll::new(2000, 650, "Though this be madness"),
            ]
        );
    }

    #[test]
    fn test_exact_heights_follow_rng() {
        let mut platforms = Vec::new();
        let mut scrolls = Vec::new();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut expected_rng = rng.clone();

        populate_act_one(1200, &mut platforms, &mut scrolls, &nine_quotes(), &mut rng).unwrap();

        let expected: Vec<i32> = (0..3)
            .map(|_| 1200 - 200 - expected_rng.random_range(0..=150))
            .collect();
        let ys: Vec<i32> = platforms.iter().map(|p| p.y()).collect();
        assert_eq!(ys, expected);
    }

    #[test]
    fn test_short_quote_list_fails_without_appending() {
        let mut platforms = Vec::new();
        let mut scrolls = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let all = nine_quotes();
        let quotes = &all[..8];

        let err = populate_act_one(1000, &mut platforms, &mut scrolls, quotes, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            LevelError::IndexOutOfRange { index: 8, len: 8 }
        ));
        assert!(platforms.is_empty());
        assert!(scrolls.is_empty());
    }

    #[test]
    fn test_appends_after_existing_entries() {
        let mut platforms = vec![Platform::standard(0, 0)];
        let mut scrolls = vec![KnowledgeScroll::new(0, 0, "already here")];
        let mut rng = Pcg32::seed_from_u64(3);

        populate_act_one(1000, &mut platforms, &mut scrolls, &nine_quotes(), &mut rng).unwrap();

        assert_eq!(platforms.len(), 4);
        assert_eq!(scrolls.len(), 3);
        assert_eq!(platforms[0], Platform::standard(0, 0));
        assert_eq!(scrolls[0].text, "already here");
        assert_eq!(required_quotes(), 9);
    }
}
