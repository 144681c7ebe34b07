pub const SCORE_OPTIMAL: u32 = 100;
pub const SCORE_NEAR: u32 = 80;
pub const SCORE_FAR: u32 = 60;
pub const SCORE_BASELINE: u32 = 40;

/// Every value `gap_score` can return, best first.
pub const ALL_SCORES: [u32; 4] = [SCORE_OPTIMAL, SCORE_NEAR, SCORE_FAR, SCORE_BASELINE];

/// Scores the spacing between the end of the -35 element and the start of
/// the -10 element. The tiers are nested, so they are tested from the
/// narrowest outwards and the first hit wins.
pub fn gap_score(gap: isize) -> u32 {
    if (16..=19).contains(&gap) {
        SCORE_OPTIMAL
    } else if (14..=21).contains(&gap) {
        SCORE_NEAR
    } else if (12..=23).contains(&gap) {
        SCORE_FAR
    } else {
        SCORE_BASELINE
    }
}
