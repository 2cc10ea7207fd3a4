mod avatar_dto;

pub use avatar_dto::{
    is_avatar_filename_allowed, UploadAvatarDto, AVATAR_DIMENSION, MAX_AVATAR_SIZE,
};
