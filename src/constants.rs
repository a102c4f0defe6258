/// Value substituted for any extracted field that came back missing or empty
pub const MISSING_FIELD_VALUE: &str = "N/A";

/// Maximum rows returned by a sync read
/// There is no continuation token; history beyond this page is unreachable
pub const SYNC_PAGE_LIMIT: usize = 100;

/// Maximum accepted base64 image payload (8MB)
/// Typical receipt photos encode to well under 2MB
pub const MAX_IMAGE_B64_BYTES: usize = 8_388_608;

/// API version reported to the OCR upstream
pub const OCR_API_VERSION: &str = "2019-12-30";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message when the image field is missing (scan-only configuration)
pub const ERR_IMAGE_REQUIRED: &str = "Image base64 required";

/// Error message when image or userId is missing (sync configuration)
pub const ERR_IMAGE_AND_USER_REQUIRED: &str = "image and userId required";

/// Error message when the sync read is missing its userId parameter
pub const ERR_USER_ID_REQUIRED: &str = "userId required";
