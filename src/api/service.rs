use async_trait::async_trait;

use crate::api::error::ApiError;
use crate::api::models::{Banner, BannerPatch, Contact, ProfileImageUpdate, RecordId, UserProfile};

#[async_trait]
pub trait BannerApi: Send + Sync {
    async fn list_banners(&self) -> Result<Vec<Banner>, ApiError>;
    async fn update_banner(&self, id: &RecordId, patch: BannerPatch) -> Result<(), ApiError>;
    async fn delete_banner(&self, id: &RecordId) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError>;
    async fn delete_contact(&self, id: &RecordId) -> Result<(), ApiError>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn get_user(&self, id: &RecordId) -> Result<UserProfile, ApiError>;
    async fn update_user_image(&self, id: &RecordId, update: ProfileImageUpdate) -> Result<(), ApiError>;
}

/// Runs every call of the wrapped client on the shared tokio runtime.
///
/// reqwest needs a tokio reactor; the GTK main loop is not one. Awaiting the
/// join handle works from any executor.
#[derive(Clone)]
pub struct RuntimeBound<C>(pub C);

impl<C> RuntimeBound<C> {
    async fn run<T, F, Fut>(&self, call: F) -> Result<T, ApiError>
    where
        C: Clone + Send + Sync + 'static,
        T: Send + 'static,
        F: FnOnce(C) -> Fut,
        Fut: std::future::Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let fut = call(self.0.clone());
        crate::utils::RUNTIME
            .spawn(fut)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

#[async_trait]
impl<C> BannerApi for RuntimeBound<C>
where
    C: BannerApi + Clone + 'static,
{
    async fn list_banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.run(|c| async move { c.list_banners().await }).await
    }

    async fn update_banner(&self, id: &RecordId, patch: BannerPatch) -> Result<(), ApiError> {
        let id = id.clone();
        self.run(move |c| async move { c.update_banner(&id, patch).await }).await
    }

    async fn delete_banner(&self, id: &RecordId) -> Result<(), ApiError> {
        let id = id.clone();
        self.run(move |c| async move { c.delete_banner(&id).await }).await
    }
}

#[async_trait]
impl<C> ContactApi for RuntimeBound<C>
where
    C: ContactApi + Clone + 'static,
{
    async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.run(|c| async move { c.list_contacts().await }).await
    }

    async fn delete_contact(&self, id: &RecordId) -> Result<(), ApiError> {
        let id = id.clone();
        self.run(move |c| async move { c.delete_contact(&id).await }).await
    }
}

#[async_trait]
impl<C> UserApi for RuntimeBound<C>
where
    C: UserApi + Clone + 'static,
{
    async fn get_user(&self, id: &RecordId) -> Result<UserProfile, ApiError> {
        let id = id.clone();
        self.run(move |c| async move { c.get_user(&id).await }).await
    }

    async fn update_user_image(&self, id: &RecordId, update: ProfileImageUpdate) -> Result<(), ApiError> {
        let id = id.clone();
        self.run(move |c| async move { c.update_user_image(&id, update).await }).await
    }
}
