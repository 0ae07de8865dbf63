// Stage completion derived from client-held progress markers. No server-side state.

pub mod handlers;
pub mod tracker;
