pub mod cipher_result;
pub mod device;
pub mod stored_record;
