//! Account management feature: registration, profile reads and updates,
//! account deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/users` | No | Register, returns account + token |
//! | GET | `/users/me` | Yes | Authenticated account record |
//! | PATCH | `/users/me` | Yes | Allow-listed profile update |
//! | DELETE | `/users/me` | Yes | Remove account, returns removed record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AccountService;
