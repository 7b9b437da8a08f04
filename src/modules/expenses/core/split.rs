use crate::shared::core::primitives::UserId;

/// One member's share of an expense, as supplied by the caller or computed by `split_equally`.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitShare {
    pub user_id: UserId,
    pub amount: f64,
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Every share is `amount / n` rounded to cents. The shares may not sum back to `amount`.
pub fn split_equally(amount: f64, user_ids: &[UserId]) -> Vec<SplitShare> {
    if user_ids.is_empty() {
        return Vec::new();
    }
    let share = round_to_cents(amount / user_ids.len() as f64);
    user_ids
        .iter()
        .map(|user_id| SplitShare {
            user_id: user_id.clone(),
            amount: share,
        })
        .collect()
}
