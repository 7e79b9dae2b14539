mod platform_requirement;

pub use platform_requirement::PlatformRequirementPolicy;
