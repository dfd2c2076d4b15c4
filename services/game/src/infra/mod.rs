pub mod db;
pub mod notifier;
pub mod pack_resolver;
