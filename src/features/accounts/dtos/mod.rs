mod account_dto;

pub use account_dto::{
    validate_update_keys, AccountResponseDto, RegisterAccountDto, UpdateAccountDto,
    UPDATE_ALLOWED_FIELDS,
};
