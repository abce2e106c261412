use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Session};
use kernel::interface::query::{
    DependOnPublicationQuery, DependOnWriterQuery, PublicationQuery, WriterQuery,
};
use kernel::interface::update::{
    DependOnPublicationModifier, DependOnWriterModifier, PublicationModifier, WriterModifier,
};
use kernel::prelude::entity::{
    Category, Isbn, Publication, PublicationId, PublicationPatch, Writer, WriterId,
};
use kernel::KernelError;

#[derive(Default)]
struct Store {
    writers: Vec<Writer>,
    publications: Vec<Publication>,
    fail_index_creation: bool,
}

/// In-process stand-in for the document store. Identifier uniqueness is
/// always enforced, like a store that already carries the unique index.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<Mutex<Store>>,
}

impl InMemoryDatabase {
    pub fn failing_index_creation() -> Self {
        let db = Self::default();
        db.store
            .lock()
            .expect("store lock poisoned")
            .fail_index_creation = true;
        db
    }
}

pub struct InMemorySession(Arc<Mutex<Store>>);

impl InMemorySession {
    fn store(&self) -> MutexGuard<'_, Store> {
        self.0.lock().expect("store lock poisoned")
    }
}

impl Session for InMemorySession {}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Session = InMemorySession;
    async fn session(&self) -> error_stack::Result<Self::Session, KernelError> {
        Ok(InMemorySession(Arc::clone(&self.store)))
    }
}

pub struct InMemoryWriterRepository;

#[async_trait::async_trait]
impl WriterQuery for InMemoryWriterRepository {
    type Session = InMemorySession;

    async fn find_all(
        &self,
        con: &mut InMemorySession,
    ) -> error_stack::Result<Vec<Writer>, KernelError> {
        Ok(con.store().writers.clone())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemorySession,
        id: &WriterId,
    ) -> error_stack::Result<Option<Writer>, KernelError> {
        Ok(con
            .store()
            .writers
            .iter()
            .find(|writer| writer.id() == id)
            .cloned())
    }
}

#[async_trait::async_trait]
impl WriterModifier for InMemoryWriterRepository {
    type Session = InMemorySession;

    async fn create_many(
        &self,
        con: &mut InMemorySession,
        writers: &[Writer],
    ) -> error_stack::Result<(), KernelError> {
        con.store().writers.extend_from_slice(writers);
        Ok(())
    }

    async fn delete_all(&self, con: &mut InMemorySession) -> error_stack::Result<u64, KernelError> {
        let removed = std::mem::take(&mut con.store().writers);
        Ok(removed.len() as u64)
    }
}

pub struct InMemoryPublicationRepository;

fn identifier_taken(store: &Store, identifier: &Isbn, except: Option<&PublicationId>) -> bool {
    store
        .publications
        .iter()
        .any(|publication| {
            publication.identifier() == identifier && Some(publication.id()) != except
        })
}

#[async_trait::async_trait]
impl PublicationQuery for InMemoryPublicationRepository {
    type Session = InMemorySession;

    async fn find_all(
        &self,
        con: &mut InMemorySession,
    ) -> error_stack::Result<Vec<Publication>, KernelError> {
        Ok(con.store().publications.clone())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemorySession,
        id: &PublicationId,
    ) -> error_stack::Result<Option<Publication>, KernelError> {
        Ok(con
            .store()
            .publications
            .iter()
            .find(|publication| publication.id() == id)
            .cloned())
    }

    async fn find_by_category(
        &self,
        con: &mut InMemorySession,
        category: &Category,
    ) -> error_stack::Result<Vec<Publication>, KernelError> {
        Ok(con
            .store()
            .publications
            .iter()
            .filter(|publication| publication.category() == category)
            .cloned()
            .collect())
    }

    async fn find_by_identifier(
        &self,
        con: &mut InMemorySession,
        identifier: &Isbn,
    ) -> error_stack::Result<Option<Publication>, KernelError> {
        Ok(con
            .store()
            .publications
            .iter()
            .find(|publication| publication.identifier() == identifier)
            .cloned())
    }

    async fn find_categories(
        &self,
        con: &mut InMemorySession,
    ) -> error_stack::Result<Vec<Category>, KernelError> {
        let categories = con
            .store()
            .publications
            .iter()
            .map(|publication| publication.category().clone())
            .collect::<BTreeSet<_>>();
        Ok(categories.into_iter().collect())
    }
}

#[async_trait::async_trait]
impl PublicationModifier for InMemoryPublicationRepository {
    type Session = InMemorySession;

    async fn create(
        &self,
        con: &mut InMemorySession,
        publication: &Publication,
    ) -> error_stack::Result<(), KernelError> {
        let mut store = con.store();
        if identifier_taken(&store, publication.identifier(), None) {
            return Err(Report::new(KernelError::DuplicateIdentifier));
        }
        store.publications.push(publication.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemorySession,
        id: &PublicationId,
        patch: &PublicationPatch,
    ) -> error_stack::Result<(), KernelError> {
        let mut store = con.store();
        if let Some(identifier) = patch.identifier() {
            if identifier_taken(&store, identifier, Some(id)) {
                return Err(Report::new(KernelError::DuplicateIdentifier));
            }
        }
        if let Some(publication) = store
            .publications
            .iter_mut()
            .find(|publication| publication.id() == id)
        {
            publication.apply(patch.clone());
        }
        Ok(())
    }

    async fn create_many(
        &self,
        con: &mut InMemorySession,
        publications: &[Publication],
    ) -> error_stack::Result<(), KernelError> {
        let mut store = con.store();
        for publication in publications {
            if identifier_taken(&store, publication.identifier(), None) {
                return Err(Report::new(KernelError::DuplicateIdentifier));
            }
            store.publications.push(publication.clone());
        }
        Ok(())
    }

    async fn delete_all(&self, con: &mut InMemorySession) -> error_stack::Result<u64, KernelError> {
        let removed = std::mem::take(&mut con.store().publications);
        Ok(removed.len() as u64)
    }

    async fn ensure_identifier_index(
        &self,
        con: &mut InMemorySession,
    ) -> error_stack::Result<(), KernelError> {
        if con.store().fail_index_creation {
            return Err(Report::new(KernelError::Internal).attach_printable("index already exists"));
        }
        Ok(())
    }
}

impl DependOnWriterQuery for InMemoryDatabase {
    type WriterQuery = InMemoryWriterRepository;
    fn writer_query(&self) -> &Self::WriterQuery {
        &InMemoryWriterRepository
    }
}

impl DependOnWriterModifier for InMemoryDatabase {
    type WriterModifier = InMemoryWriterRepository;
    fn writer_modifier(&self) -> &Self::WriterModifier {
        &InMemoryWriterRepository
    }
}

impl DependOnPublicationQuery for InMemoryDatabase {
    type PublicationQuery = InMemoryPublicationRepository;
    fn publication_query(&self) -> &Self::PublicationQuery {
        &InMemoryPublicationRepository
    }
}

impl DependOnPublicationModifier for InMemoryDatabase {
    type PublicationModifier = InMemoryPublicationRepository;
    fn publication_modifier(&self) -> &Self::PublicationModifier {
        &InMemoryPublicationRepository
    }
}
