pub mod avatar_handler;
