//! Numeric permission tiers carried in the identity headers.

pub const USER: u8 = 1;
pub const SERVER: u8 = 5;
pub const ADMIN: u8 = 10;

/// Whether a role may run admin-only operations.
pub fn is_admin(role: u8) -> bool {
    role >= ADMIN
}
