mod features;
mod footer;
mod hero;
mod lead_form;
mod nav;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use lead_form::LeadForm;
pub use nav::Nav;
