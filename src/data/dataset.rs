use super::classes::ClassSet;
use super::sample::Sample;
use crate::error::TreeError;
use nalgebra::{DMatrix, DVector};
use num_traits::{FromPrimitive, Num, ToPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::cmp::PartialOrd;
use std::fmt::{self, Display};
use std::fmt::{Debug, Formatter};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

pub trait DataValue:
    Debug
    + Clone
    + Copy
    + Num
    + FromPrimitive
    + ToPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + Display
    + 'static
{
}

impl<T> DataValue for T where
    T: Debug
        + Clone
        + Copy
        + Num
        + FromPrimitive
        + ToPrimitive
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Send
        + Sync
        + Display
        + 'static
{
}

pub trait Number: DataValue + PartialOrd {}
impl<T> Number for T where T: DataValue + PartialOrd {}

/// Labeled samples stored row-wise.
///
/// `x` holds one row per sample and one column per feature, in the order of
/// `feature_names`. `y` holds the class of each row as an index into `classes`;
/// every index is checked on construction and can't be changed afterwards.
#[derive(Clone)]
pub struct Dataset<T: Number> {
    pub(crate) x: DMatrix<T>,
    pub(crate) y: DVector<usize>,
    feature_names: Vec<String>,
    classes: ClassSet,
}

impl<T: Number> Debug for Dataset<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    features: {:?},\n    x: [\n", self.feature_names)?;

        for i in 0..self.x.nrows() {
            write!(f, "        [")?;
            for j in 0..self.x.ncols() {
                write!(f, "{:?}, ", self.x[(i, j)])?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for i in 0..self.y.len() {
            write!(f, "{:?}, ", self.classes.label(self.y[i]))?;
        }
        write!(f, "]\n}}")
    }
}

impl<T: Number> Dataset<T> {
    /// Creates a dataset from a feature matrix and class indices.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes of `feature_names`, `x` and `y` disagree
    /// or if a class index lies outside `classes`.
    pub fn new(
        feature_names: Vec<String>,
        x: DMatrix<T>,
        y: DVector<usize>,
        classes: ClassSet,
    ) -> Result<Self, TreeError> {
        if feature_names.len() != x.ncols() {
            return Err(TreeError::InvalidParameter(format!(
                "Expected {} feature columns, got {}.",
                feature_names.len(),
                x.ncols()
            )));
        }
        if x.nrows() != y.len() {
            return Err(TreeError::InvalidParameter(format!(
                "Got {} feature rows but {} labels.",
                x.nrows(),
                y.len()
            )));
        }
        if let Some(&class) = y.iter().find(|&&class| class >= classes.len()) {
            return Err(TreeError::UnknownLabel(format!("#{}", class)));
        }

        Ok(Self {
            x,
            y,
            feature_names,
            classes,
        })
    }

    /// Creates a dataset from labeled samples.
    ///
    /// # Errors
    ///
    /// Fails with `MissingFeature` if a sample lacks one of `feature_names` and
    /// with `UnknownLabel` if a sample is unlabeled or labeled outside `classes`.
    pub fn from_samples(
        feature_names: Vec<String>,
        samples: &[Sample<T>],
        classes: ClassSet,
    ) -> Result<Self, TreeError> {
        let mut values = Vec::with_capacity(samples.len() * feature_names.len());
        let mut labels = Vec::with_capacity(samples.len());

        for sample in samples {
            for name in &feature_names {
                values.push(
                    sample
                        .get(name)
                        .ok_or_else(|| TreeError::MissingFeature(name.clone()))?,
                );
            }
            let label = sample
                .label()
                .ok_or_else(|| TreeError::UnknownLabel(String::new()))?;
            labels.push(classes.index_of(label)?);
        }

        let x = DMatrix::from_row_slice(samples.len(), feature_names.len(), &values);
        Self::new(feature_names, x, DVector::from_vec(labels), classes)
    }

    /// Feature matrix, one row per sample.
    pub fn x(&self) -> &DMatrix<T> {
        &self.x
    }

    /// Class index of each row. Every index is below `classes().len()`.
    pub fn y(&self) -> &DVector<usize> {
        &self.y
    }

    pub fn is_not_empty(&self) -> bool {
        !(self.x.nrows() == 0 || self.y.is_empty())
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    /// Returns the column holding `feature`.
    pub fn feature_index(&self, feature: &str) -> Result<usize, TreeError> {
        self.feature_names
            .iter()
            .position(|name| name == feature)
            .ok_or_else(|| TreeError::MissingFeature(feature.to_string()))
    }

    /// Returns row `index` as a labeled sample.
    pub fn sample(&self, index: usize) -> Sample<T> {
        Sample::new(
            self.feature_names
                .iter()
                .zip(self.x.row(index).iter())
                .map(|(name, &value)| (name.clone(), value)),
        )
        .with_label(self.classes.label(self.y[index]))
    }

    /// Builds a dataset out of the given rows, in the given order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            x: self.x.select_rows(indices),
            y: self.y.select_rows(indices),
            feature_names: self.feature_names.clone(),
            classes: self.classes.clone(),
        }
    }

    /// Partitions the rows into `feature < threshold` (left) and `feature >= threshold` (right).
    pub fn split_on_threshold(&self, feature_index: usize, threshold: T) -> (Self, Self) {
        let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = (0..self.nrows())
            .partition(|&index| self.x[(index, feature_index)] < threshold);

        (self.select(&left_indices), self.select(&right_indices))
    }

    /// Splits the dataset into a training and a test set.
    ///
    /// `floor(nrows * test_size)` rows are drawn without replacement into the
    /// test set. The training set holds every row that isn't equal by content
    /// to one of the drawn rows, so duplicates of a test row never end up in
    /// training.
    ///
    /// # Errors
    ///
    /// Returns an error if `test_size` is not within `[0.0, 1.0]`.
    pub fn train_test_split(
        &self,
        test_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), TreeError> {
        if !(0.0..=1.0).contains(&test_size) {
            return Err(TreeError::InvalidParameter(
                "Test size should be between 0.0 and 1.0".into(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let test_size = (self.nrows() as f64 * test_size).floor() as usize;
        let test_indices = &indices[..test_size];

        let train_indices = (0..self.nrows())
            .filter(|&index| !test_indices.iter().any(|&test| self.rows_equal(index, test)))
            .collect::<Vec<_>>();

        Ok((self.select(&train_indices), self.select(test_indices)))
    }

    fn rows_equal(&self, a: usize, b: usize) -> bool {
        self.y[a] == self.y[b] && self.x.row(a).iter().eq(self.x.row(b).iter())
    }
}
