// web_app/api/mod.rs - Directory data plumbing
//
// - client.rs: The browser-side directory request (compiled everywhere,
//   performs I/O only under `hydrate`)
// - config.rs / roster.rs: Host configuration and the endpoint answering
//   the directory request (SSR only)

pub mod client;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod roster;
