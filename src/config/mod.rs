pub mod rules;
pub mod site_profile;

pub use rules::FilterRules;
pub use site_profile::SiteProfile;
