//! Seed content for the mock store.

use serde_json::{json, Value};

fn image(name: &str) -> Value {
    json!({
        "documentId": format!("media-{name}"),
        "name": format!("{name}.jpg"),
        "url": format!("/uploads/{name}.jpg"),
        "mime": "image/jpeg",
        "width": 1600,
        "height": 1200,
        "size": 412.5,
        "formats": {
            "thumbnail": { "url": format!("/uploads/thumbnail_{name}.jpg"), "width": 208, "height": 156 },
            "small": { "url": format!("/uploads/small_{name}.jpg"), "width": 500, "height": 375 },
            "medium": { "url": format!("/uploads/medium_{name}.jpg"), "width": 750, "height": 563 }
        }
    })
}

fn cdn_video(name: &str) -> Value {
    json!({
        "documentId": format!("media-{name}"),
        "name": format!("{name}.mp4"),
        "url": format!("https://res.cloudinary.com/kennel/video/upload/v1700000000/{name}.mp4"),
        "mime": "video/mp4",
        "size": 20480.0,
        "formats": null,
        "provider": "cloudinary"
    })
}

pub fn puppies() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "documentId": "pup-bruno",
            "name": "Bruno",
            "status": "Available",
            "date_of_birth": "2024-03-05",
            "price": 4500,
            "gender": "Male",
            "color": "Blue Fawn",
            "weight": 12.5,
            "description": [
                { "type": "paragraph", "children": [{ "type": "text", "text": "Playful and ", "bold": false }, { "type": "text", "text": "confident", "bold": true }] }
            ],
            "images": [image("bruno")],
            "createdAt": "2024-05-01T10:00:00.000Z"
        }),
        json!({
            "id": 2,
            "documentId": "pup-luna",
            "name": "Luna",
            "status": "Reserved",
            "date_of_birth": "2024-02-11",
            "price": 5200,
            "gender": "Female",
            "description": "Calm lap dog.",
            "images": null,
            "createdAt": "2024-04-20T10:00:00.000Z"
        }),
        json!({
            "id": 3,
            "documentId": "pup-mango",
            "name": "Mango",
            "status": "Available",
            "date_of_birth": "2024-06-18",
            "price": 3999.5,
            "gender": "Female",
            "images": [image("mango")],
            "createdAt": "2024-07-02T10:00:00.000Z"
        }),
    ]
}

pub fn studs() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "documentId": "stud-tank",
            "name": "Tank",
            "age": "3 years",
            "availability": "Available",
            "fee": 3000,
            "bloodlines": "Exotic line",
            "specialties": "Compact frame",
            "images": [image("tank")],
            "background_video": cdn_video("tank-hero"),
            "background_color": "#1a1a1a",
            "createdAt": "2023-11-01T10:00:00.000Z"
        }),
        json!({
            "id": 2,
            "documentId": "stud-rocco",
            "name": "Rocco",
            "age": "5 years",
            "availability": "Busy",
            "fee": 2500,
            "images": [],
            "createdAt": "2023-08-01T10:00:00.000Z"
        }),
    ]
}

pub fn gallery_items() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "documentId": "gallery-yard",
            "title": "Play yard",
            "description": "Afternoon in the yard",
            "alt_text": "Puppies playing on grass",
            "order": 2,
            "image": image("yard")
        }),
        json!({
            "id": 2,
            "documentId": "gallery-litter",
            "title": "Spring litter",
            "description": "Eight weeks old",
            "alt_text": "Litter of puppies",
            "order": 1,
            "image": image("litter")
        }),
    ]
}

pub fn homepage() -> Value {
    json!({
        "id": 1,
        "hero_headline": "Healthy bulldogs, raised at home",
        "hero_subheadline": "Family-run breeding program",
        "hero_video": cdn_video("home-hero"),
        "hero_poster_image": image("home-poster"),
        "featured_section_title": "Available now",
        "featured_section_description": "Meet the puppies ready for their new homes."
    })
}

pub fn breeding_program() -> Value {
    json!({
        "id": 1,
        "documentId": "breeding-program",
        "title": "Our Breeding Program",
        "subtext": "Health first.",
        "description": [
            { "type": "heading", "level": 2, "children": [{ "text": "Standards" }] },
            { "type": "list", "format": "unordered", "children": [
                { "type": "list-item", "children": [{ "text": "Health tested parents" }] },
                { "type": "list-item", "children": [{ "text": "Vet checked litters" }] }
            ] }
        ],
        "hero_media": [image("program-hero")],
        "Featured_IMAGE": image("program-featured"),
        "photo_gallery": null,
        "partnership_theme_enabled": false
    })
}

pub fn privacy_policy() -> Value {
    json!({
        "id": 1,
        "documentId": "privacy-policy",
        "title": "Privacy Policy",
        "content": [
            { "type": "paragraph", "children": [{ "text": "We only collect what we need." }] }
        ],
        "company_logo": null,
        "lastupdated": "2024-01-15"
    })
}

pub fn terms_of_service() -> Value {
    json!({
        "id": 1,
        "documentId": "terms-of-service",
        "title": "Terms of Service",
        "content": [
            { "type": "paragraph", "children": [{ "text": "Deposits are non-refundable." }] }
        ],
        "company_logo": {
            "url": "/uploads/logo.png",
            "mime": "image/png",
            "alternativeText": "Kennel logo",
            "formats": {
                "medium": { "url": "/uploads/medium_logo.png" }
            }
        },
        "lastupdated": "2024-02-01"
    })
}
