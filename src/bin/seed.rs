// src/bin/seed.rs
// Catalog seeder: fills a running westland-store instance with a starter
// set of colors, materials and prepared purchases through the HTTP API.

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::time::Duration;
use uuid::Uuid;

// --- ANSI colors for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// --- Seed data ---

struct ColorSeed {
    name: &'static str,
    cost: i32,
}

struct MaterialSeed {
    name: &'static str,
    cost: i32,
    // kg/m3, from the density directory the store prices against
    density: i32,
}

struct PreparedSeed {
    title: &'static str,
    description: &'static str,
    color: &'static str,
    material: &'static str,
    size: i16,
}

const COLORS: &[ColorSeed] = &[
    ColorSeed { name: "Yellow", cost: 100 },
    ColorSeed { name: "Red", cost: 120 },
    ColorSeed { name: "Blue", cost: 120 },
    ColorSeed { name: "Green", cost: 110 },
    ColorSeed { name: "Unpainted", cost: 0 },
];

const MATERIALS: &[MaterialSeed] = &[
    MaterialSeed { name: "Iron", cost: 250, density: 7800 },
    MaterialSeed { name: "Aluminium", cost: 400, density: 2700 },
    MaterialSeed { name: "Oak", cost: 150, density: 700 },
    MaterialSeed { name: "Pine", cost: 90, density: 520 },
    MaterialSeed { name: "Foam", cost: 30, density: 40 },
];

const PREPARED: &[PreparedSeed] = &[
    PreparedSeed {
        title: "Yellow iron cube",
        description: "The classic: small, heavy, unmistakably yellow.",
        color: "Yellow",
        material: "Iron",
        size: 1,
    },
    PreparedSeed {
        title: "Blue oak cube",
        description: "Medium oak cube, light enough for air balloon delivery.",
        color: "Blue",
        material: "Oak",
        size: 5,
    },
    PreparedSeed {
        title: "Foam giant",
        description: "XXXL foam cube. Ships by trolley, not because of the weight.",
        color: "Unpainted",
        material: "Foam",
        size: 25,
    },
];

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
struct CatalogEntry {
    id: Uuid,
}

struct Seeder {
    base_url: String,
    token: String,
    client: Client,
    created: u32,
    skipped: u32,
}

impl Seeder {
    fn new(base_url: String, token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            token,
            client,
            created: 0,
            skipped: 0,
        }
    }

    async fn check_service_health(client: &Client, base_url: &str) -> bool {
        match client.get(format!("{}/health", base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// POST a catalog entry; a 409 means it was seeded before and we fetch
    /// the existing row instead
    async fn upsert(
        &mut self,
        collection: &str,
        lookup: &str,
        body: serde_json::Value,
    ) -> Result<Uuid> {
        let url = format!("{}/{}", self.base_url, collection);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {}", url))?;

        if response.status().is_success() {
            self.created += 1;
            println!("{}✅ created {}/{}{}", GREEN, collection, lookup, RESET);
            return Ok(response.json::<CatalogEntry>().await?.id);
        }

        if response.status() == reqwest::StatusCode::CONFLICT {
            self.skipped += 1;
            println!("{}⏭  {}/{} already present{}", YELLOW, collection, lookup, RESET);

            let existing = self
                .client
                .get(format!("{}/{}/{}", self.base_url, collection, lookup))
                .bearer_auth(&self.token)
                .send()
                .await?
                .error_for_status()?;
            return Ok(existing.json::<CatalogEntry>().await?.id);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        bail!("HTTP {} - {}", status, body)
    }

    /// Titles of presets already on the server; presets have no unique key,
    /// so this is what keeps reruns from duplicating them
    async fn existing_preset_titles(&self) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct PresetPage {
            data: Vec<PresetTitle>,
        }

        #[derive(Deserialize)]
        struct PresetTitle {
            title: String,
        }

        let page: PresetPage = self
            .client
            .get(format!("{}/prepared-purchases?page_size=100", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page.data.into_iter().map(|p| p.title).collect())
    }

    async fn seed_prepared(&mut self, seed: &PreparedSeed, color_id: Uuid, material_id: Uuid) -> Result<()> {
        let url = format!("{}/prepared-purchases", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({
                "title": seed.title,
                "description": seed.description,
                "color_id": color_id,
                "material_id": material_id,
                "size": seed.size,
            }))
            .send()
            .await
            .with_context(|| format!("POST {}", url))?;

        if response.status().is_success() {
            self.created += 1;
            println!("{}✅ created preset '{}'{}", GREEN, seed.title, RESET);
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            bail!("HTTP {} - {}", status, body)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url =
        env::var("STORE_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let username = env::var("ADMIN_USERNAME").context("ADMIN_USERNAME must be set")?;
    let password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

    println!("\n{}🔍 Checking service status...{}", CYAN, RESET);
    if !Seeder::check_service_health(&client, &base_url).await {
        println!("{}❌ Service unavailable.{}", RED, RESET);
        println!("{}Please ensure westland-store is running (cargo run){}", YELLOW, RESET);
        std::process::exit(1);
    }
    println!("{}✅ Service available{}\n", GREEN, RESET);

    // Authenticate as the admin provisioned by the bootstrap sequence
    let token: TokenResponse = client
        .post(format!("{}/auth/token", base_url))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await?
        .error_for_status()
        .context("Login failed - check ADMIN_USERNAME/ADMIN_PASSWORD")?
        .json()
        .await?;

    let mut seeder = Seeder::new(base_url, token.token);

    println!("{}🚀 Seeding catalog...{}\n", BOLD, RESET);

    let mut color_ids = Vec::new();
    for color in COLORS {
        let id = seeder
            .upsert(
                "colors",
                color.name,
                json!({ "name": color.name, "cost": color.cost }),
            )
            .await?;
        color_ids.push((color.name, id));
    }

    let mut material_ids = Vec::new();
    for material in MATERIALS {
        let id = seeder
            .upsert(
                "materials",
                material.name,
                json!({
                    "name": material.name,
                    "cost": material.cost,
                    "density": material.density,
                }),
            )
            .await?;
        material_ids.push((material.name, id));
    }

    let existing_titles = seeder.existing_preset_titles().await?;

    for seed in PREPARED {
        if existing_titles.iter().any(|t| t == seed.title) {
            seeder.skipped += 1;
            println!("{}⏭  preset '{}' already present{}", YELLOW, seed.title, RESET);
            continue;
        }

        let color_id = color_ids
            .iter()
            .find(|(name, _)| *name == seed.color)
            .map(|(_, id)| *id)
            .context("preset references unseeded color")?;
        let material_id = material_ids
            .iter()
            .find(|(name, _)| *name == seed.material)
            .map(|(_, id)| *id)
            .context("preset references unseeded material")?;

        seeder.seed_prepared(seed, color_id, material_id).await?;
    }

    println!("\n{}✨ Seeding complete{}", GREEN, RESET);
    println!("  • created: {}{}{}", GREEN, seeder.created, RESET);
    println!("  • skipped: {}{}{}", YELLOW, seeder.skipped, RESET);

    Ok(())
}
