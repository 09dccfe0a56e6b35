use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service entry point
    Root,
    /// Product catalogue
    Products,
}
