pub mod annotations;
pub mod compiler;
pub mod mathphysics;
pub mod package;
pub mod scenario;
pub mod target;
pub mod task;
pub mod waypoint;
pub mod waypoints;
