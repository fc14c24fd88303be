//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::{Expr, Query, SelectStatement};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait,
};

use super::db_err;
use crate::domain::{Booking, BookingRepository, BookingWithRoom, DomainError, DomainResult, Room};
use crate::infrastructure::database::entities::{booking, room};

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Explain a conditional write that touched no row: the room is gone or
    /// it is full.
    async fn unavailable(&self, room_id: i32) -> DomainError {
        match room::Entity::find_by_id(room_id).one(&self.db).await {
            Ok(Some(_)) => {
                debug!("Room {} has no capacity left", room_id);
                DomainError::RoomUnavailable(room_id)
            }
            Ok(None) => DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: room_id.to_string(),
            },
            Err(e) => db_err(e),
        }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn booking_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        user_id: m.user_id,
        room_id: m.room_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn room_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        name: m.name,
        capacity: m.capacity,
        hotel_id: m.hotel_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

/// `SELECT id FROM rooms WHERE id = ? AND capacity > 0`
fn available_room_query(room_id: i32) -> SelectStatement {
    room::Entity::find()
        .select_only()
        .column(room::Column::Id)
        .filter(room::Column::Id.eq(room_id))
        .filter(room::Column::Capacity.gt(0))
        .into_query()
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn insert(&self, user_id: i32, room_id: i32) -> DomainResult<Option<Booking>> {
        debug!("Inserting booking: user={} room={}", user_id, room_id);

        // INSERT INTO bookings (...) SELECT ... FROM rooms WHERE id = ? AND capacity > 0
        let now = Utc::now();
        let source = Query::select()
            .expr(Expr::val(user_id))
            .expr(Expr::val(room_id))
            .expr(Expr::val(now))
            .expr(Expr::val(now))
            .from(room::Entity)
            .and_where(room::Column::Id.eq(room_id))
            .and_where(room::Column::Capacity.gt(0))
            .to_owned();

        let mut insert = Query::insert();
        insert
            .into_table(booking::Entity)
            .columns([
                booking::Column::UserId,
                booking::Column::RoomId,
                booking::Column::CreatedAt,
                booking::Column::UpdatedAt,
            ])
            .select_from(source)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .returning_col(booking::Column::Id);

        let backend = self.db.get_database_backend();
        let Some(row) = self
            .db
            .query_one(backend.build(&insert))
            .await
            .map_err(db_err)?
        else {
            return Err(self.unavailable(room_id).await);
        };

        let id: i32 = row.try_get("", "id").map_err(db_err)?;
        Ok(Some(Booking {
            id,
            user_id,
            room_id,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn find_room_by_id(&self, room_id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(room_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(room_to_domain))
    }

    async fn find_for_user(&self, user_id: i32) -> DomainResult<Option<BookingWithRoom>> {
        let row = booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_asc(booking::Column::Id)
            .find_also_related(room::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(match row {
            Some((b, Some(r))) => Some(BookingWithRoom {
                id: b.id,
                room: room_to_domain(r),
            }),
            _ => None,
        })
    }

    async fn set_room(&self, booking_id: i32, room_id: i32) -> DomainResult<Option<Booking>> {
        debug!("Moving booking {} to room {}", booking_id, room_id);

        // UPDATE bookings SET room_id = ? WHERE id = ?
        //   AND EXISTS (SELECT id FROM rooms WHERE id = ? AND capacity > 0)
        let result = booking::Entity::update_many()
            .col_expr(booking::Column::RoomId, Expr::value(room_id))
            .col_expr(booking::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(booking::Column::Id.eq(booking_id))
            .filter(Expr::exists(available_room_query(room_id)))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        let booking = booking::Entity::find_by_id(booking_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match booking {
            None => Ok(None),
            Some(_) if result.rows_affected == 0 => Err(self.unavailable(room_id).await),
            Some(m) => Ok(Some(booking_to_domain(m))),
        }
    }
}
