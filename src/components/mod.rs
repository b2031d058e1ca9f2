//! UI Components
//!
//! Leptos components of the ordering page.

mod nav_bar;
mod menu_section;
mod menu_card;
mod customization_modal;
mod cart_panel;
mod cart_line_row;
mod remove_confirm_button;
mod checkout_summary;
mod promo_carousel;
mod visitor_badge;
mod contact_section;

pub use nav_bar::NavBar;
pub use menu_section::MenuSection;
pub use menu_card::MenuCard;
pub use customization_modal::CustomizationModal;
pub use cart_panel::CartPanel;
pub use cart_line_row::CartLineRow;
pub use remove_confirm_button::RemoveConfirmButton;
pub use checkout_summary::{CheckoutSummary, OrderConfirmed};
pub use promo_carousel::PromoCarousel;
pub use visitor_badge::VisitorBadge;
pub use contact_section::ContactSection;
