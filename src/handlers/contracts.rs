use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::authorization::{verify_booking_party, verify_booking_role};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::bookings as booking_db;
use crate::db::contracts as contract_db;
use crate::events::hub::NotificationHub;
use crate::handlers::notify;
use crate::models::bookings::Status as BookingStatus;
use crate::models::contracts::{CreateContract, Party};
use crate::models::notifications::{CreateNotification, Kind};

/// POST /api/contracts — the artist drafts a contract for a confirmed
/// booking. The amount defaults to the booking's quoted total.
pub async fn create_contract(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateContract>,
) -> impl Responder {
    let input = body.into_inner();

    let booking =
        match verify_booking_role(db.get_ref(), input.booking_id, user.0.id, Party::Artist).await {
            Ok(b) => b,
            Err(resp) => return resp,
        };

    if booking.status != BookingStatus::Confirmed {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": "Contracts can only be drafted for confirmed bookings",
        }));
    }

    let amount = match input.amount.or(booking.total_amount) {
        Some(a) if a > 0.0 => a,
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "A positive contract amount is required",
            }));
        }
    };

    match contract_db::insert_contract(db.get_ref(), booking.id, input.template, amount).await {
        Ok(contract) => HttpResponse::Created().json(contract),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create contract: {e}"),
        })),
    }
}

/// GET /api/contracts — contracts on any booking the caller is party to,
/// with lazy expiry applied before returning.
pub async fn get_contracts(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    let bookings = match booking_db::get_bookings_for_user(db.get_ref(), user.0.id, None).await {
        Ok(b) => b,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let booking_ids: Vec<Uuid> = bookings.iter().map(|b| b.id).collect();
    let contracts = match contract_db::get_contracts_for_bookings(db.get_ref(), booking_ids).await {
        Ok(c) => c,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let mut result = Vec::with_capacity(contracts.len());
    for contract in contracts {
        match contract_db::expire_if_due(db.get_ref(), contract).await {
            Ok(c) => result.push(c),
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Database error: {e}"),
                }));
            }
        }
    }

    HttpResponse::Ok().json(result)
}

/// Fetch a contract, check the caller is a party to its booking, and apply
/// lazy expiry. Shared by the single-contract handlers.
async fn load_authorized_contract(
    db: &DatabaseConnection,
    contract_id: Uuid,
    user_id: Uuid,
) -> Result<(crate::models::contracts::Model, Party), HttpResponse> {
    let contract = contract_db::get_contract_by_id(db, contract_id)
        .await
        .map_err(|e| {
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }))
        })?
        .ok_or_else(|| {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Contract {contract_id} not found"),
            }))
        })?;

    let (_, party) = verify_booking_party(db, contract.booking_id, user_id).await?;

    let contract = contract_db::expire_if_due(db, contract).await.map_err(|e| {
        HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        }))
    })?;

    Ok((contract, party))
}

/// GET /api/contracts/{id} — a single contract, parties only.
pub async fn get_contract(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match load_authorized_contract(db.get_ref(), path.into_inner(), user.0.id).await {
        Ok((contract, _)) => HttpResponse::Ok().json(contract),
        Err(resp) => resp,
    }
}

/// POST /api/contracts/{id}/send — the artist sends a draft for signing.
/// Opens the 30-day signing window and notifies the promoter.
pub async fn send_contract(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let (contract, party) =
        match load_authorized_contract(db.get_ref(), path.into_inner(), user.0.id).await {
            Ok(pair) => pair,
            Err(resp) => return resp,
        };

    if party != Party::Artist {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the artist can send a contract",
        }));
    }

    let (sent_at, expires_at) = match contract.prepare_send(chrono::Utc::now()) {
        Ok(stamps) => stamps,
        Err(e) => {
            return HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }));
        }
    };

    let booking_id = contract.booking_id;
    match contract_db::mark_sent(db.get_ref(), contract, sent_at, expires_at).await {
        Ok(updated) => {
            if let Ok(Some(booking)) = booking_db::get_booking_by_id(db.get_ref(), booking_id).await
            {
                notify(
                    db.get_ref(),
                    hub.get_ref(),
                    CreateNotification {
                        user_id: booking.promoter_id,
                        kind: Kind::ContractSent,
                        title: "Contract ready to sign".to_string(),
                        body: format!("A contract for {} is awaiting your signature", booking.event_name),
                        booking_id: Some(booking.id),
                    },
                )
                .await;
            }
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to send contract: {e}"),
        })),
    }
}

/// POST /api/contracts/{id}/sign — either party signs a sent contract.
/// The signing side is derived from which party of the booking the caller
/// is; the status flips to signed only when both signatures are in.
pub async fn sign_contract(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let (contract, party) =
        match load_authorized_contract(db.get_ref(), path.into_inner(), user.0.id).await {
            Ok(pair) => pair,
            Err(resp) => return resp,
        };

    let signing = match contract.apply_signature(party, chrono::Utc::now()) {
        Ok(s) => s,
        Err(e) => {
            return HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }));
        }
    };

    let fully_signed = signing.signed_at.is_some();
    let booking_id = contract.booking_id;

    match contract_db::apply_signing(db.get_ref(), contract, signing).await {
        Ok(updated) => {
            if fully_signed {
                if let Ok(Some(booking)) =
                    booking_db::get_booking_by_id(db.get_ref(), booking_id).await
                {
                    for recipient in [booking.artist_id, booking.promoter_id] {
                        notify(
                            db.get_ref(),
                            hub.get_ref(),
                            CreateNotification {
                                user_id: recipient,
                                kind: Kind::ContractSigned,
                                title: "Contract fully signed".to_string(),
                                body: format!("The contract for {} is now signed by both parties", booking.event_name),
                                booking_id: Some(booking.id),
                            },
                        )
                        .await;
                    }
                }
            }
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to sign contract: {e}"),
        })),
    }
}
