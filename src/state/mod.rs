//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State is split by domain: `auth` owns the in-memory session and the
//! guard decision machine, `session` owns its persistence, `submissions`
//! owns pure derived views over the loaded list snapshot. The session is
//! held in a single `RwSignal<AuthState>` provided via context and mutated
//! only through the functions in `auth`.

pub mod auth;
pub mod session;
pub mod submissions;
