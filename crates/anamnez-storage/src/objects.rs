use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// Result of a GET operation, including the body and ETag.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
    pub etag: Option<String>,
}

/// Get an object from S3.
pub async fn get_object(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<GetObjectOutput, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let etag = resp.e_tag().map(|s| s.to_string());
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(GetObjectOutput { body, etag })
}

/// Precondition attached to a conditional PUT.
pub enum WriteCondition<'a> {
    /// `If-None-Match: *`: only create, never overwrite.
    Absent,
    /// `If-Match: <etag>`: only replace the version that was read.
    Matches(&'a str),
}

/// Put an object to S3 under a precondition. Returns the new ETag on
/// success, or `StorageError::PreconditionFailed` if another writer got
/// there first.
pub async fn put_object_conditional(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: Option<&str>,
    condition: WriteCondition<'_>,
) -> Result<String, StorageError> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body));

    req = match condition {
        WriteCondition::Absent => req.if_none_match("*"),
        WriteCondition::Matches(etag) => req.if_match(etag),
    };

    if let Some(ct) = content_type {
        req = req.content_type(ct);
    }

    let resp = req.send().await.map_err(|e| {
        let err = e.into_service_error();
        // 412 PreconditionFailed, or 409 ConditionalRequestConflict when two
        // conditional writes race on the same key.
        match err.code() {
            Some("PreconditionFailed") | Some("ConditionalRequestConflict") => {
                StorageError::PreconditionFailed {
                    key: key.to_string(),
                }
            }
            _ => StorageError::PutObject(err.to_string()),
        }
    })?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Delete every object under `prefix`, one listing page at a time.
///
/// Returns the number of objects deleted.
pub async fn delete_prefix(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<usize, StorageError> {
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(prefix)
        .into_paginator()
        .send();

    let mut deleted = 0;
    while let Some(page) = pages.next().await {
        let page = page.map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

        let objects = page
            .contents()
            .iter()
            .filter_map(|obj| obj.key())
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StorageError::DeleteObject(e.to_string()))?;
        if objects.is_empty() {
            continue;
        }

        let count = objects.len();
        let batch = Delete::builder()
            .set_objects(Some(objects))
            .quiet(true)
            .build()
            .map_err(|e| StorageError::DeleteObject(e.to_string()))?;
        let resp = client
            .delete_objects()
            .bucket(bucket)
            .delete(batch)
            .send()
            .await
            .map_err(|e| StorageError::DeleteObject(e.into_service_error().to_string()))?;

        // Quiet mode only reports failures.
        if let Some(failed) = resp.errors().first() {
            return Err(StorageError::DeleteObject(format!(
                "{}: {}",
                failed.key().unwrap_or_default(),
                failed.message().unwrap_or("delete failed")
            )));
        }
        deleted += count;
    }

    Ok(deleted)
}
