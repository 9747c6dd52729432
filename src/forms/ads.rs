use std::io::{Read, Seek, SeekFrom};

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::assets::ImageUpload;
use crate::domain::category::Category;
use crate::domain::types::{
    CityName, PhoneNumber, StreetAddress, TypeConstraintError,
};

/// Upper bound on uploaded image size.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];
const ALLOWED_IMAGE_MIMES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Multipart form posted from the ad submission page.
#[derive(MultipartForm)]
pub struct SubmitAdForm {
    pub phone: Text<String>,
    pub city: Text<String>,
    pub address: Option<Text<String>>,
    /// Form field name kept from the submission page; stored as the category.
    pub group: Text<String>,
    #[multipart(limit = "2MiB")]
    pub image: Option<TempFile>,
}

/// Validated field values of a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitAdFormPayload {
    pub phone: PhoneNumber,
    pub city: CityName,
    pub address: Option<StreetAddress>,
    pub category: Category,
}

/// A fully parsed submission: typed fields plus the optional image.
pub struct AdSubmission {
    pub payload: SubmitAdFormPayload,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Error)]
pub enum ImageUploadError {
    #[error("Only image files (jpeg, jpg, png, gif) are allowed!")]
    UnsupportedType,
    #[error("image exceeds the 2 MiB size limit")]
    TooLarge,
    #[error("uploaded file has no name")]
    MissingFileName,
    #[error("failed to read uploaded file")]
    ReadFailed,
}

impl From<std::io::Error> for ImageUploadError {
    fn from(_: std::io::Error) -> Self {
        Self::ReadFailed
    }
}

#[derive(Debug, Error)]
pub enum SubmitAdFormError {
    #[error("{0}")]
    Upload(#[from] ImageUploadError),
    #[error("submit form validation failed: {0}")]
    Validation(String),
    #[error("submit form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SubmitAdFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SubmitAdFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Debug, Validate)]
struct SubmitAdFields {
    #[validate(length(min = 1, message = "phone is required"))]
    phone: String,
    #[validate(length(min = 1, message = "city is required"))]
    city: String,
    #[validate(length(min = 1, message = "category is required"))]
    group: String,
}

impl SubmitAdForm {
    /// Validate the form into a typed submission.
    ///
    /// The image is checked first so that a bad upload is reported before
    /// field validation, matching the order of the HTTP upload middleware.
    pub fn into_submission(self) -> Result<AdSubmission, SubmitAdFormError> {
        let image = self.image.map(parse_image).transpose()?;

        let payload = build_payload(
            &self.phone,
            &self.city,
            self.address.as_ref().map(|a| a.as_str()),
            &self.group,
        )?;

        Ok(AdSubmission { payload, image })
    }
}

fn build_payload(
    phone: &str,
    city: &str,
    address: Option<&str>,
    group: &str,
) -> Result<SubmitAdFormPayload, SubmitAdFormError> {
    SubmitAdFields {
        phone: phone.trim().to_string(),
        city: city.trim().to_string(),
        group: group.trim().to_string(),
    }
    .validate()?;

    let category = Category::parse(group).ok_or_else(|| {
        SubmitAdFormError::Validation(format!("unknown category: {}", group.trim()))
    })?;

    let address = address
        .filter(|a| !a.trim().is_empty())
        .map(StreetAddress::new)
        .transpose()?;

    Ok(SubmitAdFormPayload {
        phone: PhoneNumber::new(phone)?,
        city: CityName::new(city)?,
        address,
        category,
    })
}

fn parse_image(mut file: TempFile) -> Result<ImageUpload, ImageUploadError> {
    let file_name = file
        .file_name
        .clone()
        .ok_or(ImageUploadError::MissingFileName)?;

    validate_image_meta(
        &file_name,
        file.content_type.as_ref().map(|m| m.essence_str()),
        file.size,
    )?;

    let handle = file.file.as_file_mut();
    handle.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::with_capacity(file.size);
    handle.read_to_end(&mut bytes)?;

    Ok(ImageUpload { file_name, bytes })
}

/// Check extension, MIME type (when supplied) and size against the image
/// upload constraints.
fn validate_image_meta(
    file_name: &str,
    mime_essence: Option<&str>,
    size: usize,
) -> Result<(), ImageUploadError> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or(ImageUploadError::UnsupportedType)?;

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ImageUploadError::UnsupportedType);
    }

    if let Some(mime) = mime_essence
        && !ALLOWED_IMAGE_MIMES.contains(&mime)
    {
        return Err(ImageUploadError::UnsupportedType);
    }

    if size > MAX_IMAGE_BYTES {
        return Err(ImageUploadError::TooLarge);
    }

    Ok(())
}
