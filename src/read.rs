use std::ops::Range;

use bio::io::fastq;

/// A sequencing read as handed over by the parsing layer.
///
/// `qual` holds encoded quality bytes and must be the same length as `seq`.
/// Trim boundaries are computed from `qual` and applied to both slices, so a
/// read breaking this panics when its trimmed sequence is taken. Records from
/// `bio::io::fastq::Reader` are checked on parse; hand-built ones
/// (`fastq::Record::with_attrs`) are not, use `fastq::Record::check` first.
pub trait QualityRead {
    fn seq(&self) -> &[u8];
    fn qual(&self) -> &[u8];

    fn len(&self) -> usize {
        self.qual().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QualityRead for fastq::Record {
    fn seq(&self) -> &[u8] {
        fastq::Record::seq(self)
    }

    fn qual(&self) -> &[u8] {
        fastq::Record::qual(self)
    }
}

/// Borrowed `[start, end)` window onto a read. Nothing is copied until
/// [`TrimmedRead::to_record`] is called.
#[derive(Debug)]
pub struct TrimmedRead<'r, R: ?Sized> {
    source: &'r R,
    start: usize,
    end: usize,
}

impl<R: ?Sized> Clone for TrimmedRead<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for TrimmedRead<'_, R> {}

impl<'r, R: QualityRead + ?Sized> TrimmedRead<'r, R> {
    pub(crate) fn new(source: &'r R, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end && range.end <= source.len());
        Self { source, start: range.start, end: range.end }
    }

    pub fn source(&self) -> &'r R {
        self.source
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// # Panics
    ///
    /// If the source's `seq` is shorter than its `qual`.
    pub fn seq(&self) -> &'r [u8] {
        &self.source.seq()[self.start..self.end]
    }

    pub fn qual(&self) -> &'r [u8] {
        &self.source.qual()[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<R: QualityRead + ?Sized> QualityRead for TrimmedRead<'_, R> {
    fn seq(&self) -> &[u8] {
        TrimmedRead::seq(self)
    }

    fn qual(&self) -> &[u8] {
        TrimmedRead::qual(self)
    }
}

impl TrimmedRead<'_, fastq::Record> {
    /// Owned record restricted to the retained bases; id and description are kept.
    pub fn to_record(&self) -> fastq::Record {
        fastq::Record::with_attrs(self.source.id(), self.source.desc(), self.seq(), self.qual())
    }
}
