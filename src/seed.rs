use chrono::Utc;
use log::{info, warn};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::entity::{feedback, resource, student};

/// Seeds two demo students with one resource and one feedback entry each.
/// Runs only when the student table is empty, so restarts are idempotent.
pub async fn seed_demo_data(db: &DatabaseConnection) {
    let existing = match student::Entity::find().count(db).await {
        Ok(count) => count,
        Err(e) => {
            warn!("demo seed skipped, count failed: {}", e);
            return;
        }
    };
    if existing > 0 {
        return;
    }

    let now = Utc::now();

    let alice = student::ActiveModel {
        email: Set("alice@example.com".to_string()),
        display_name: Set("Alice Johnson".to_string()),
        preferred_locale: Set(Some("en".to_string())),
        created: Set(Some(now)),
        updated: Set(Some(now)),
        ..Default::default()
    };
    let pierre = student::ActiveModel {
        email: Set("pierre@example.com".to_string()),
        display_name: Set("Pierre Dupont".to_string()),
        preferred_locale: Set(Some("fr".to_string())),
        created: Set(Some(now)),
        updated: Set(Some(now)),
        ..Default::default()
    };

    let alice = match alice.insert(db).await {
        Ok(model) => model,
        Err(e) => {
            warn!("demo seed failed inserting student: {}", e);
            return;
        }
    };
    let pierre = match pierre.insert(db).await {
        Ok(model) => model,
        Err(e) => {
            warn!("demo seed failed inserting student: {}", e);
            return;
        }
    };

    let samples = [
        (alice.id, "sample-document.txt", "This is a sample document."),
        (pierre.id, "example-file.txt", "Ceci est un fichier exemple."),
    ];
    for (student_id, file_name, body) in samples {
        let model = resource::ActiveModel {
            public_id: Set(generate_public_id()),
            student_id: Set(student_id),
            file_name: Set(file_name.to_string()),
            file_type: Set("text/plain".to_string()),
            size: Set(body.len() as i64),
            file_data: Set(body.as_bytes().to_vec()),
            created: Set(Some(now)),
        };
        if let Err(e) = model.insert(db).await {
            warn!("demo seed failed inserting resource: {}", e);
        }
    }

    let notes = [
        (
            alice.id,
            "Great work on your endgames! Keep drilling rook-and-pawn positions.",
        ),
        (
            pierre.id,
            "Excellente partie. Continuez à travailler vos ouvertures.",
        ),
    ];
    for (student_id, content) in notes {
        let model = feedback::ActiveModel {
            student_id: Set(student_id),
            content: Set(content.to_string()),
            created: Set(Some(now)),
            ..Default::default()
        };
        if let Err(e) = model.insert(db).await {
            warn!("demo seed failed inserting feedback: {}", e);
        }
    }

    info!(
        "demo seed created students {} and {}",
        alice.display_name, pierre.display_name
    );
}

pub fn generate_public_id() -> String {
    let prefix = Utc::now().format("%Y%m%d%H%M%S").to_string();
    let rand: String = (0..20)
        .map(|_| {
            let idx = rand::random::<u8>() % 26;
            (b'a' + idx) as char
        })
        .collect();
    format!("{}{}", prefix, rand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_db;

    #[test]
    fn public_ids_are_distinct_and_well_formed() {
        let a = generate_public_id();
        let b = generate_public_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 14 + 20);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[actix_web::test]
    async fn seed_populates_empty_store_once() {
        let db = test_db().await;
        seed_demo_data(&db).await;

        let students = student::Entity::find().count(&db).await.expect("count");
        let resources = resource::Entity::find().count(&db).await.expect("count");
        let notes = feedback::Entity::find().count(&db).await.expect("count");
        assert_eq!(students, 2);
        assert_eq!(resources, 2);
        assert_eq!(notes, 2);

        // second run is a no-op
        seed_demo_data(&db).await;
        let students = student::Entity::find().count(&db).await.expect("count");
        assert_eq!(students, 2);
    }
}
