//! Shared containers for building a document from several threads.
//!
//! The model types themselves are plain data mutated through `&mut self`.
//! `Shared<T>` wraps one container in its own mutex; each append holds the
//! lock only while the element is pushed. Rendering should happen after all
//! writers are done, via `with` or `try_unwrap`.

use std::sync::{Arc, Mutex, PoisonError};

use crate::models::{Document, Feature, Folder, LineString, Point, Polygon};

#[derive(Debug, Default)]
pub struct Shared<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self { inner: Arc::new(Mutex::new(value)) }
    }

    /// Run `f` with exclusive access to the container
    ///
    /// A lock poisoned by a panicking writer is recovered: appends leave the
    /// container consistent.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Take the container back once no other handle remains
    pub fn try_unwrap(self) -> std::result::Result<T, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(|inner| Self { inner })
    }
}

impl Shared<Document> {
    pub fn add_folder(&self, folder: Folder) {
        self.with(|document| document.add_folder(folder));
    }
}

impl Shared<Folder> {
    pub fn add_feature(&self, feature: impl Into<Feature>) {
        let feature: Feature = feature.into();
        self.with(|folder| folder.add_feature(feature));
    }
}

impl Shared<LineString> {
    pub fn add_point(&self, point: impl Into<Option<Point>>) {
        let point: Option<Point> = point.into();
        self.with(|line| line.add_point(point));
    }
}

impl Shared<Polygon> {
    pub fn add_point(&self, point: impl Into<Option<Point>>) {
        let point: Option<Point> = point.into();
        self.with(|polygon| polygon.add_point(point));
    }
}
