//! Image reconciliation: re-associate images the store already has, upload
//! the rest.
//!
//! A local image is "found" when its checksum appears in the URL of a remote
//! image. The store embeds the checksum in the asset file name on upload, so
//! this is a lookup key, not a content verification.

use catsync_core::{ImageUpdate, LocalImage, NewImage, RemoteImage};
use catsync_store::StoreApi;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImagePolicy {
    /// Skip variant ids the remote image already carries when
    /// re-associating. Off by default: ids are appended as-is, so repeated
    /// runs grow the list.
    pub dedupe_variant_ids: bool,
}

/// What the reconciled images should be attached to.
#[derive(Debug, Clone, Copy)]
pub struct ImageTarget<'a> {
    /// Variants created by this run; featured images are attached to them.
    pub variant_ids: &'a [i64],
    /// Alt text for uploads; the product's colour.
    pub alt: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageAction {
    /// Push a new variant id list onto an existing remote image.
    Reassociate(ImageUpdate),
    /// Found remotely and not featured: nothing to write.
    Keep { file_name: String },
    Upload(NewImage),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageReport {
    /// File names of uploaded images.
    pub uploaded: Vec<String>,
    /// Ids of remote images whose variant association was updated.
    pub updated: Vec<i64>,
    pub failed: usize,
}

/// Remote images whose URL embeds `local`'s checksum. An empty checksum
/// matches nothing.
#[must_use]
pub fn matching_remote<'r>(local: &LocalImage, remote: &'r [RemoteImage]) -> Vec<&'r RemoteImage> {
    let checksum = local.checksum.trim();
    if checksum.is_empty() {
        return Vec::new();
    }
    remote.iter().filter(|r| r.src.contains(checksum)).collect()
}

/// Decides, per local image, between re-association and upload.
///
/// A featured image found in several remote images re-associates every one
/// of them.
#[must_use]
pub fn plan_images(
    local: &[LocalImage],
    remote: &[RemoteImage],
    target: &ImageTarget<'_>,
    policy: &ImagePolicy,
) -> Vec<ImageAction> {
    let mut plan = Vec::with_capacity(local.len());
    for image in local {
        let found = matching_remote(image, remote);
        if found.is_empty() {
            plan.push(ImageAction::Upload(NewImage {
                file_name: image.file_name.clone(),
                alt: target.alt.or(image.color.as_deref()).map(str::to_owned),
                data: image.data.clone(),
                variant_ids: if image.featured {
                    target.variant_ids.to_vec()
                } else {
                    Vec::new()
                },
            }));
        } else if image.featured {
            plan.extend(found.into_iter().map(|remote_image| {
                ImageAction::Reassociate(ImageUpdate {
                    image_id: remote_image.id,
                    variant_ids: merged_variant_ids(
                        &remote_image.variant_ids,
                        target.variant_ids,
                        policy,
                    ),
                })
            }));
        } else {
            plan.push(ImageAction::Keep {
                file_name: image.file_name.clone(),
            });
        }
    }
    plan
}

fn merged_variant_ids(existing: &[i64], added: &[i64], policy: &ImagePolicy) -> Vec<i64> {
    let mut ids = existing.to_vec();
    if policy.dedupe_variant_ids {
        for id in added {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
    } else {
        ids.extend_from_slice(added);
    }
    ids
}

/// Executes `plan` against the store, one call at a time.
///
/// A failed call is logged and counted; the remaining actions still run.
pub async fn apply_image_plan<S: StoreApi>(
    store: &S,
    product_id: i64,
    plan: Vec<ImageAction>,
) -> ImageReport {
    let mut report = ImageReport::default();
    for action in plan {
        match action {
            ImageAction::Reassociate(update) => {
                match store.update_image(product_id, &update).await {
                    Ok(_) => {
                        tracing::info!(product_id, image_id = update.image_id, "image re-associated");
                        report.updated.push(update.image_id);
                    }
                    Err(e) => {
                        tracing::error!(product_id, image_id = update.image_id, error = %e, "image update failed");
                        report.failed += 1;
                    }
                }
            }
            ImageAction::Upload(image) => match store.create_image(product_id, &image).await {
                Ok(created) => {
                    tracing::info!(product_id, image_id = created.id, file_name = %image.file_name, "image uploaded");
                    report.uploaded.push(image.file_name);
                }
                Err(e) => {
                    tracing::error!(product_id, file_name = %image.file_name, error = %e, "image upload failed");
                    report.failed += 1;
                }
            },
            ImageAction::Keep { file_name } => {
                tracing::debug!(product_id, file_name = %file_name, "image already present");
            }
        }
    }
    report
}

/// Plans and applies image changes for `product_id`.
pub async fn reconcile_images<S: StoreApi>(
    store: &S,
    product_id: i64,
    local: &[LocalImage],
    remote: &[RemoteImage],
    target: &ImageTarget<'_>,
    policy: &ImagePolicy,
) -> ImageReport {
    let plan = plan_images(local, remote, target, policy);
    apply_image_plan(store, product_id, plan).await
}
