use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::event::{CreateEventParams, Event, EventFilter, UpdateEventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, unfeatured event.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            date: ActiveValue::Set(params.date),
            location: ActiveValue::Set(params.location),
            banner_url: ActiveValue::Set(params.banner_url),
            is_featured: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(event))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let event = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(event.map(Event::from_entity))
    }

    /// Lists events matching the filter.
    ///
    /// Upcoming listings are ordered by date ascending, everything else by date descending.
    /// Events sharing a date keep insertion order.
    pub async fn list(&self, filter: EventFilter) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find();

        if filter.featured {
            query = query.filter(entity::event::Column::IsFeatured.eq(true));
        }

        if filter.upcoming {
            query = query
                .filter(entity::event::Column::Date.gte(filter.now))
                .order_by_asc(entity::event::Column::Date);
        } else {
            query = query.order_by_desc(entity::event::Column::Date);
        }
        query = query.order_by_asc(entity::event::Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let events = query.all(self.db).await?;

        Ok(events.into_iter().map(Event::from_entity).collect())
    }

    /// Applies a partial update to an event.
    ///
    /// # Returns
    /// - `Ok(Event)`: The updated event
    /// - `Err(DbErr::RecordNotFound)`: No event with this ID
    pub async fn update(&self, id: i32, params: UpdateEventParams) -> Result<Event, DbErr> {
        let event = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active_model: entity::event::ActiveModel = event.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(date) = params.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(location) = params.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(banner_url) = params.banner_url {
            active_model.banner_url = ActiveValue::Set(Some(banner_url));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Event::from_entity(updated))
    }

    /// Sets the featured flag of an event.
    ///
    /// Featuring an event unfeatures every other event in the same transaction, so at most
    /// one event is featured once this commits.
    ///
    /// # Returns
    /// - `Ok(Event)`: The updated event
    /// - `Err(DbErr::RecordNotFound)`: No event with this ID; nothing is changed
    pub async fn set_featured(&self, id: i32, is_featured: bool) -> Result<Event, DbErr> {
        let txn = self.db.begin().await?;

        let event = entity::prelude::Event::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        if is_featured {
            entity::prelude::Event::update_many()
                .col_expr(entity::event::Column::IsFeatured, Expr::value(false))
                .filter(entity::event::Column::IsFeatured.eq(true))
                .filter(entity::event::Column::Id.ne(id))
                .exec(&txn)
                .await?;
        }

        let mut active_model: entity::event::ActiveModel = event.into();
        active_model.is_featured = ActiveValue::Set(is_featured);
        let updated = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Event::from_entity(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
