//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use pushkind_catalog::db::{DbPool, establish_connection_pool};
use pushkind_catalog::domain::brand::{Brand, NewBrand};
use pushkind_catalog::domain::category::{Category, NewCategory};
use pushkind_catalog::domain::color::{Color, NewColor};
use pushkind_catalog::domain::size::{NewSize, Size};
use pushkind_catalog::repository::{
    BrandWriter, CategoryWriter, ColorWriter, DieselRepository, SizeWriter,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
///
/// The file lives in its own temporary directory, which is removed together
/// with the WAL side files when the value is dropped.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_string_lossy().into_owned();

        let pool = establish_connection_pool(&url).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb {
            path,
            pool,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Lookup records most product tests need.
pub struct Catalog {
    pub brand: Brand,
    pub red: Color,
    pub blue: Color,
    pub small: Size,
    pub large: Size,
    pub tops: Category,
}

pub fn seed_catalog(repo: &DieselRepository) -> Catalog {
    Catalog {
        brand: repo
            .create_brand(&NewBrand::new("Acme"))
            .expect("create brand"),
        red: repo
            .create_color(&NewColor::new("Red").with_hex("#ff0000"))
            .expect("create red"),
        blue: repo
            .create_color(&NewColor::new("Blue"))
            .expect("create blue"),
        small: repo.create_size(&NewSize::new("S")).expect("create S"),
        large: repo.create_size(&NewSize::new("L")).expect("create L"),
        tops: repo
            .create_category(&NewCategory::new("Tops").with_description("Shirts and tees"))
            .expect("create category"),
    }
}
