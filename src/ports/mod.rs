/// Ports - the seams between the graph core and the outside world
///
/// Inbound ports are what callers drive (project analysis); outbound ports
/// are what the core drives (file reading, the composer binary, output).
pub mod inbound;
pub mod outbound;
