mod maintenance_dto;

pub use maintenance_dto::MaintenanceResponseDto;
