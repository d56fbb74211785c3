mod lifecycle;

pub mod prelude {
    use std::cell::RefCell;

    use otdb_core::gateways::images::ImageStorageError;

    pub use otdb_core::{
        db::*,
        entities::*,
        gateways::{
            images::ImageStorage,
            notify::{NotificationEvent, NotificationGateway},
        },
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use otdb_db_memory::MemoryDb;
    pub use otdb_entities::builders::*;

    pub use crate::{error::AppError, prelude as flows, state::*};

    /// The district the test deployment is configured for.
    pub fn district() -> MapBbox {
        MapBbox::new(
            MapPoint::from_lat_lng_deg(51.3650, 7.8450),
            MapPoint::from_lat_lng_deg(51.7450, 8.6050),
        )
    }

    pub struct DummyNotifyGW;

    impl NotificationGateway for DummyNotifyGW {
        fn notify(&self, _: NotificationEvent) {}
    }

    /// Image storage double that records every call.
    #[derive(Default)]
    pub struct FakeImageStorage {
        pub uploaded: RefCell<u32>,
        pub delete_batches: RefCell<Vec<Vec<String>>>,
        pub fail_uploads: bool,
        pub fail_deletions: bool,
    }

    impl ImageStorage for FakeImageStorage {
        fn upload_image(
            &self,
            _base64_data: &str,
        ) -> std::result::Result<String, ImageStorageError> {
            if self.fail_uploads {
                return Err(ImageStorageError::Other(anyhow::anyhow!("storage offline")));
            }
            let mut uploaded = self.uploaded.borrow_mut();
            *uploaded += 1;
            Ok(format!(
                "https://storage.example.com/object/public/tree-images/img-{uploaded}.jpg"
            ))
        }

        fn delete_images(&self, paths: &[String]) -> std::result::Result<usize, ImageStorageError> {
            if self.fail_deletions {
                return Err(ImageStorageError::Other(anyhow::anyhow!("storage offline")));
            }
            self.delete_batches.borrow_mut().push(paths.to_vec());
            Ok(paths.len())
        }

        fn url_path_marker(&self) -> &str {
            "/object/public/"
        }
    }

    pub struct BackendFixture {
        pub db: MemoryDb,
        pub state: AppState,
        pub notify: DummyNotifyGW,
        pub images: FakeImageStorage,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                db: MemoryDb::init(),
                state: AppState::new(district().center()),
                notify: DummyNotifyGW,
                images: FakeImageStorage::default(),
            }
        }

        /// Fixture with a stored "Maria" already signed in.
        pub fn signed_in_as(role: Role) -> Self {
            let mut fixture = Self::new();
            let user = fixture.create_user("Maria", "maria@example.org", role);
            fixture.state.set_session(user);
            fixture
        }

        pub fn create_user(&self, name: &str, email: &str, role: Role) -> User {
            let user = User::build().name(name).email(email).role(role).finish();
            self.db.create_user(&user).unwrap();
            user
        }

        pub fn seed_suggestion(&self, id: &str) -> TreeSuggestion {
            let suggestion = TreeSuggestion::build()
                .id(id)
                .pos(district().center())
                .title("Seeded tree")
                .author("seed-author", "Seed Author")
                .finish();
            self.db.create_suggestion(suggestion.clone()).unwrap();
            suggestion
        }

        pub fn seed_report(&self, id: &str) -> DamageReport {
            let report = DamageReport::build()
                .id(id)
                .pos(district().center())
                .title("Seeded damage")
                .author("seed-author", "Seed Author")
                .finish();
            self.db.create_report(report.clone()).unwrap();
            report
        }
    }
}
