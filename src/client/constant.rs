pub const SITE_NAME: &str = "Koseli Colorado";

pub const SITE_DESCRIPTION: &str =
    "Bringing the Nepali community together through music, culture, and celebration.";

/// Hero title shown when no event is available.
pub const WELCOME_TITLE: &str = "Welcome to Koseli Colorado";
