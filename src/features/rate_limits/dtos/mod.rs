mod rate_limit_status_dto;

pub use rate_limit_status_dto::RateLimitStatusDto;
