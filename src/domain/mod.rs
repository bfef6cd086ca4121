//! Membership domain records. Pure data with no actor or storage concerns.

pub mod app_data;
pub mod member;
pub mod payment;
pub mod plan;
pub mod profile;

pub use app_data::*;
pub use member::*;
pub use payment::*;
pub use plan::*;
pub use profile::*;

/// One-time charge added to the registration payment only.
pub const ENTRY_FEE: u64 = 200;

/// Highest price a plan may be given.
pub const MAX_PLAN_PRICE: u64 = 10_000_000;

/// Amount used in a renewal link when no plan can be resolved for the member.
pub const FALLBACK_RENEWAL_AMOUNT: u64 = 1000;

/// Currency code embedded in payment URIs.
pub const CURRENCY_CODE: &str = "INR";

/// Name shown when the profile has no business name yet.
pub const DEFAULT_GYM_NAME: &str = "Gym Admin Pro";

/// Photo reference given to members registered without a picture.
pub const DEFAULT_AVATAR_URL: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIyNCIgaGVpZ2h0PSIyNCIgdmlld0JveD0iMCAwIDI0IDI0IiBmaWxsPSJub25lIiBzdHJva2U9IiM5YzlhOWEiIHN0cm9rZS13aWR0aD0iMS41Ij48cGF0aCBkPSJNMjAgMjF2LTJhNCA0IDAgMCAwLTQtNEg4YTQgNCAwIDAgMC00IDR2MiIgLz48Y2lyY2xlIGN4PSIxMiIgY3k9IjciIHI9IjQiIC8+PC9zdmc+";
