use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};

use crate::modules::events::core::event::{EventPatch, NewEvent};
use crate::modules::events::core::responses::Mutation;
use crate::modules::events::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct GqlNewEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<String>,
    pub date: Option<String>,
}

impl From<GqlNewEvent> for NewEvent {
    fn from(v: GqlNewEvent) -> Self {
        Self {
            title: v.title.unwrap_or_default(),
            description: v.description.unwrap_or_default(),
            location: v.location.unwrap_or_default(),
            event_date: v.event_date.unwrap_or_default(),
            date: v.date,
        }
    }
}

#[derive(InputObject)]
pub struct GqlEventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<String>,
    pub date: Option<String>,
    pub sort_date: Option<String>,
    pub likes: Option<i64>,
    pub dislikes: Option<i64>,
}

impl From<GqlEventPatch> for EventPatch {
    fn from(v: GqlEventPatch) -> Self {
        Self {
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

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_event(&self, context: &Context<'_>, input: GqlNewEvent) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        match state.store.add_event(input.into(), false).await? {
            Mutation::Record(envelope) => Ok(envelope.event.into()),
            Mutation::Listing(_) => Err("expected the added event".into()),
        }
    }

    async fn update_event(
        &self,
        context: &Context<'_>,
        id: ID,
        patch: GqlEventPatch,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        match state.store.update_event(&id, patch.into(), false).await? {
            Mutation::Record(envelope) => Ok(envelope.event.into()),
            Mutation::Listing(_) => Err("expected the updated event".into()),
        }
    }

    async fn delete_event(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        match state.store.delete_event(&id, false).await? {
            Mutation::Record(envelope) => Ok(envelope.deleted_event.into()),
            Mutation::Listing(_) => Err("expected the deleted event".into()),
        }
    }
}
