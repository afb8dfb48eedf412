use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: String,
    pub date: String,
    pub sort_date: String,
    pub likes: i64,
    pub dislikes: i64,
}

impl From<Event> for GqlEvent {
    fn from(v: Event) -> Self {
        Self {
            id: ID(v.id.to_string()),
            title: v.title,
            description: v.description,
            location: v.location,
            event_date: v.event_date,
            date: v.date,
            sort_date: v.sort_date,
            likes: v.likes,
            dislikes: v.dislikes,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let listing = state.store.get_events().await?;
        Ok(listing.events.into_iter().map(Into::into).collect())
    }

    async fn event(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let lookup = state.store.get_event_by_id(&id).await?;
        Ok(lookup.event.map(Into::into))
    }

    async fn events_by_title(
        &self,
        context: &Context<'_>,
        title: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let listing = state.store.get_events_by_title(&title).await?;
        Ok(listing.events.into_iter().map(Into::into).collect())
    }

    async fn events_count(
        &self,
        context: &Context<'_>,
        include_tombstones: Option<bool>,
    ) -> GqlResult<i64> {
        let state = context.data_unchecked::<AppState>();
        let count = state
            .store
            .get_events_count(include_tombstones.unwrap_or(true))
            .await?;
        Ok(count.count as i64)
    }
}
