pub mod composer;
pub mod prefix;
