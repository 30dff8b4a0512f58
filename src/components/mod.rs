pub mod address_display;
pub mod confirmation;
pub mod crypto_select;
pub mod email_capture;
pub mod fallback_image;
pub mod method_select;
pub mod network_select;
pub mod step_header;
pub mod success;
pub mod toast;

pub use address_display::AddressDisplay;
pub use confirmation::Confirmation;
pub use crypto_select::CryptoSelect;
pub use email_capture::EmailCapture;
pub use fallback_image::FallbackImage;
pub use method_select::MethodSelect;
pub use network_select::NetworkSelect;
pub use step_header::StepHeader;
pub use success::Success;
