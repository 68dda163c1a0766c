pub mod driver_routes;
pub mod location_routes;
pub mod mission_routes;
pub mod report_routes;
pub mod subcontractor_routes;
pub mod sync_routes;
pub mod trip_routes;
pub mod vehicle_routes;
