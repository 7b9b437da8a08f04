use rand::{Rng, distr::Alphanumeric};

pub const INVITE_CODE_LENGTH: usize = 6;

/// Draws a code uniformly over `[A-Za-z0-9]`. Uniqueness is not checked.
pub fn generate_invite_code() -> String {
    generate_invite_code_with(&mut rand::rng())
}

fn generate_invite_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(Alphanumeric)
        .take(INVITE_CODE_LENGTH)
        .map(char::from)
        .collect()
}
