/// Site name shown in page titles and the header.
pub static SITE_NAME: &str = "Minbar";
