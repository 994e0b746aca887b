//! Access to the dataset files in the data home, fetching them on demand.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::files::{
    self, BundleFiles, DwiFiles, TractogramFiles, bundle_endpoint_key_of, bundle_key_of,
    label_key, surface_key_of,
};
use crate::registry::{DatasetSpec, REGISTRY};
use futures::stream::{self, Stream, StreamExt};
use polars::prelude::DataFrame;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};
use tractodata_fetch::{Config, Fetched, Fetcher, FileStatus};
use tractodata_labels::{Endpoint, ExcludeIncludeMap, Hemisphere, Label, Surface, Tissue};
use tractodata_scores::{
    TrackingEvaluationConfig, angular_performance, bundle_performance, classify_submission_files,
    overall_performance,
};

/// Default number of datasets fetched at once.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Dataset repository rooted at a data home.
#[derive(Debug)]
pub struct Repository {
    fetcher: Fetcher,
    registry: Vec<DatasetSpec>,
}

impl Repository {
    /// Create a repository for the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_registry(config, std::iter::empty())
    }

    /// Create a repository whose registry entries are replaced by `entries`,
    /// e.g. for a mirror publishing files with different digests.
    pub fn with_registry(
        config: Config,
        entries: impl IntoIterator<Item = DatasetSpec>,
    ) -> Result<Self> {
        let mut registry = REGISTRY.to_vec();
        for entry in entries {
            registry[entry.dataset as usize] = entry;
        }
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            registry,
        })
    }

    /// Create a repository configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Configuration in use.
    pub const fn config(&self) -> &Config {
        self.fetcher.config()
    }

    /// Registry entry of a dataset.
    pub fn spec(&self, dataset: Dataset) -> &DatasetSpec {
        &self.registry[dataset as usize]
    }

    /// Absolute folder holding a dataset.
    pub fn folder(&self, dataset: Dataset) -> PathBuf {
        self.config().home().join(self.spec(dataset).relative_folder())
    }

    /// Fetch a dataset, downloading only what is missing or corrupt.
    pub async fn fetch(&self, dataset: Dataset) -> Result<Fetched> {
        self.fetch_spec(self.spec(dataset)).await
    }

    /// Fetch the dataset described by `spec`.
    pub async fn fetch_spec(&self, spec: &DatasetSpec) -> Result<Fetched> {
        info!("Dataset: {}", spec.dataset);
        Ok(self.fetcher.fetch(&spec.fetch_spec()).await?)
    }

    /// Fetch several datasets, at most `concurrency` at a time, yielding each
    /// result as it completes.
    pub fn fetch_stream(
        &self,
        datasets: &[Dataset],
        concurrency: usize,
    ) -> impl Stream<Item = (Dataset, Result<Fetched>)> + '_ {
        stream::iter(datasets.to_vec())
            .map(move |dataset| async move {
                let result = self.fetch(dataset).await;
                if let Err(e) = &result {
                    warn!(%dataset, "Fetch failed: {e}");
                }
                (dataset, result)
            })
            .buffer_unordered(concurrency.max(1))
    }

    /// Fetch several datasets, at most `concurrency` at a time.
    ///
    /// Results come back in completion order.
    pub async fn fetch_all(
        &self,
        datasets: &[Dataset],
        concurrency: usize,
    ) -> Vec<(Dataset, Result<Fetched>)> {
        self.fetch_stream(datasets, concurrency).collect().await
    }

    /// Local state of the dataset file, without network access.
    pub async fn status(&self, dataset: Dataset) -> Result<Vec<(String, FileStatus)>> {
        Ok(self.fetcher.status(&self.spec(dataset).fetch_spec()).await?)
    }

    /// Files of a dataset, fetching it when needed.
    ///
    /// Archive datasets resolve to their sorted members, leaving use
    /// permission files out.
    pub async fn fnames(&self, dataset: Dataset) -> Result<Vec<PathBuf>> {
        self.fnames_of(self.spec(dataset)).await
    }

    /// Files of the dataset described by `spec`, fetching it when needed.
    pub async fn fnames_of(&self, spec: &DatasetSpec) -> Result<Vec<PathBuf>> {
        let fetched = self.fetch_spec(spec).await?;
        Ok(files::resolve_fnames(spec, &fetched))
    }

    /// The single file of a dataset.
    pub async fn fname(&self, dataset: Dataset) -> Result<PathBuf> {
        files::single(dataset, self.fnames(dataset).await?)
    }

    /// Bundle keys (`bundle[,hemisphere]`) of a dataset.
    pub async fn list_bundles(&self, dataset: Dataset) -> Result<Vec<String>> {
        Ok(files::keys(&self.fnames(dataset).await?, bundle_key_of))
    }

    /// Bundle endpoint keys (`bundle[,hemisphere],endpoint`) of a dataset.
    pub async fn list_bundle_endpoints(&self, dataset: Dataset) -> Result<Vec<String>> {
        Ok(files::keys(&self.fnames(dataset).await?, bundle_endpoint_key_of))
    }

    /// DTI map names of a dataset.
    pub async fn list_dti_maps(&self, dataset: Dataset) -> Result<Vec<String>> {
        Ok(files::keys(&self.fnames(dataset).await?, label_key(Label::Dti)))
    }

    /// Exclusion/inclusion map names of a dataset.
    pub async fn list_exclude_include_maps(&self, dataset: Dataset) -> Result<Vec<String>> {
        Ok(files::keys(&self.fnames(dataset).await?, label_key(Label::ExcludeInclude)))
    }

    /// Tissue map names of a dataset.
    pub async fn list_tissue_maps(&self, dataset: Dataset) -> Result<Vec<String>> {
        Ok(files::keys(&self.fnames(dataset).await?, label_key(Label::Tissue)))
    }

    /// Surface keys (`surface[,hemisphere]`) of a dataset.
    pub async fn list_surfaces(&self, dataset: Dataset) -> Result<Vec<String>> {
        Ok(files::keys(&self.fnames(dataset).await?, surface_key_of))
    }

    /// Anatomy image.
    pub async fn anat(&self, dataset: Dataset) -> Result<PathBuf> {
        self.fname(dataset).await
    }

    /// Diffusion image with its b-values and b-vectors.
    pub async fn dwi(&self, dataset: Dataset) -> Result<DwiFiles> {
        files::dwi_files(dataset, &self.fnames(dataset).await?)
    }

    /// Diffusion model peaks image.
    pub async fn diffusion_peaks(&self, dataset: Dataset) -> Result<PathBuf> {
        self.fname(dataset).await
    }

    /// Tractogram with its reference anatomy.
    pub async fn tracking(&self, anat: Dataset, tracking: Dataset) -> Result<TractogramFiles> {
        Ok(TractogramFiles {
            reference: self.fname(anat).await?,
            tractogram: self.fname(tracking).await?,
        })
    }

    /// Bundle tractograms with their reference anatomy, keyed by
    /// `bundle[,hemisphere]`.
    pub async fn bundling(
        &self,
        anat: Dataset,
        bundling: Dataset,
        bundles: Option<&[String]>,
        hemispheres: Option<&[Hemisphere]>,
    ) -> Result<BundleFiles> {
        let reference = self.fname(anat).await?;
        let bundles = self.bundle_masks(bundling, bundles, hemispheres).await?;
        Ok(BundleFiles { reference, bundles })
    }

    /// DTI maps keyed by map name.
    pub async fn dti_maps(
        &self,
        dataset: Dataset,
        names: Option<&[String]>,
    ) -> Result<BTreeMap<String, PathBuf>> {
        let fnames = files::filter_on(self.fnames(dataset).await?, Label::Dti, names);
        Ok(files::keyed(fnames, label_key(Label::Dti)))
    }

    /// Exclusion/inclusion maps keyed by map name.
    pub async fn exclude_include_maps(
        &self,
        dataset: Dataset,
        names: Option<&[ExcludeIncludeMap]>,
    ) -> Result<BTreeMap<String, PathBuf>> {
        let fnames = files::filter_on(self.fnames(dataset).await?, Label::ExcludeInclude, names);
        Ok(files::keyed(fnames, label_key(Label::ExcludeInclude)))
    }

    /// Tissue maps keyed by tissue.
    pub async fn tissue_maps(
        &self,
        dataset: Dataset,
        tissues: Option<&[Tissue]>,
    ) -> Result<BTreeMap<String, PathBuf>> {
        let fnames = files::filter_on(self.fnames(dataset).await?, Label::Tissue, tissues);
        Ok(files::keyed(fnames, label_key(Label::Tissue)))
    }

    /// Surfaces keyed by `surface[,hemisphere]`.
    pub async fn surfaces(
        &self,
        dataset: Dataset,
        types: Option<&[Surface]>,
        hemispheres: Option<&[Hemisphere]>,
    ) -> Result<BTreeMap<String, PathBuf>> {
        let fnames = files::filter_on(self.fnames(dataset).await?, Label::Hemisphere, hemispheres);
        let fnames = files::filter_on(fnames, Label::Surface, types);
        Ok(files::keyed(fnames, surface_key_of))
    }

    /// Bundle masks keyed by `bundle[,hemisphere]`.
    pub async fn bundle_masks(
        &self,
        dataset: Dataset,
        bundles: Option<&[String]>,
        hemispheres: Option<&[Hemisphere]>,
    ) -> Result<BTreeMap<String, PathBuf>> {
        let fnames = files::filter_on(self.fnames(dataset).await?, Label::Bundle, bundles);
        let fnames = files::filter_on(fnames, Label::Hemisphere, hemispheres);
        Ok(files::keyed(fnames, bundle_key_of))
    }

    /// Bundle endpoint masks keyed by `bundle[,hemisphere],endpoint`.
    pub async fn bundle_endpoint_masks(
        &self,
        dataset: Dataset,
        bundles: Option<&[String]>,
        hemispheres: Option<&[Hemisphere]>,
        endpoints: Option<&[Endpoint]>,
    ) -> Result<BTreeMap<String, PathBuf>> {
        let fnames = files::filter_on(self.fnames(dataset).await?, Label::Bundle, bundles);
        let fnames = files::filter_on(fnames, Label::Hemisphere, hemispheres);
        let fnames = files::filter_on(fnames, Label::Endpoint, endpoints);
        Ok(files::keyed(fnames, bundle_endpoint_key_of))
    }

    /// Tracking evaluation configuration.
    pub async fn tracking_evaluation_config(
        &self,
        dataset: Dataset,
    ) -> Result<TrackingEvaluationConfig> {
        let fname = self.fname(dataset).await?;
        Ok(TrackingEvaluationConfig::from_path(&fname)?)
    }

    async fn submission_files(&self) -> Result<tractodata_scores::SubmissionFiles> {
        let fnames = self.fnames(Dataset::Ismrm2015ChallengeSubmission).await?;
        Ok(classify_submission_files(&fnames)?)
    }

    /// ISMRM 2015 Tractography Challenge overall submission performance.
    pub async fn submission_overall_performance(
        &self,
        scores: Option<&[String]>,
    ) -> Result<DataFrame> {
        let files = self.submission_files().await?;
        Ok(overall_performance(&files.overall, scores)?)
    }

    /// ISMRM 2015 Tractography Challenge submission angular error performance.
    pub async fn submission_angular_performance(
        &self,
        scores: Option<&[String]>,
        rois: Option<&[String]>,
    ) -> Result<DataFrame> {
        let files = self.submission_files().await?;
        Ok(angular_performance(&files.angular_error, scores, rois)?)
    }

    /// ISMRM 2015 Tractography Challenge submission bundle performance.
    pub async fn submission_bundle_performance(
        &self,
        scores: Option<&[String]>,
        bundles: Option<&[String]>,
    ) -> Result<DataFrame> {
        let files = self.submission_files().await?;
        Ok(bundle_performance(&files.individual_bundle, scores, bundles)?)
    }
}
