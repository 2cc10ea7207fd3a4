//! Avatar feature: upload, deletion and public serving of profile pictures.
//!
//! Uploads are validated (size, extension allow-list), resized to a fixed
//! 250x250 square and re-encoded as PNG before being stored on the account
//! row.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/users/me/avatar` | Yes | Upload and store an avatar |
//! | DELETE | `/users/me/avatar` | Yes | Clear the avatar |
//! | GET | `/users/{id}/avatar` | No | Serve the stored avatar as PNG |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AvatarService;
