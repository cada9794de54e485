// Layout
pub mod card;
pub mod page_header;

// Controls
pub mod badge;
pub mod button;
pub mod progress;

// Form fields
pub mod form;
pub mod form_select;
pub mod input;
pub mod textarea;

// Identity & feedback
pub mod avatar;
pub mod toast;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use textarea::*;
pub use toast::*;
