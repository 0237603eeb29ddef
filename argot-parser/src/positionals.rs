//! Iterators over the positional arguments left once options are over.

use core::iter::FusedIterator;

use crate::lexer::Argument;
use crate::parser::Options;

/// A iterator over the remaining arguments, borrowing the parser.
///
/// Created by [`Options::positionals`]. Arguments are yielded verbatim, even when they look like
/// options.
#[derive(Debug)]
pub struct Positionals<'a, A: Argument, I> {
    first: Option<A>,
    opts: &'a mut Options<A, I>,
}

impl<'a, A, I> Positionals<'a, A, I>
where
    A: Argument,
    I: Iterator<Item = A>,
{
    pub(crate) fn new(first: Option<A>, opts: &'a mut Options<A, I>) -> Self {
        Positionals { first, opts }
    }
}

impl<A, I> Iterator for Positionals<'_, A, I>
where
    A: Argument,
    I: Iterator<Item = A>,
{
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.first.take().or_else(|| self.opts.next_verbatim())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        size_hint(self.first.is_some(), self.opts.size_hint())
    }
}

impl<A, I> FusedIterator for Positionals<'_, A, I>
where
    A: Argument,
    I: Iterator<Item = A>,
{
}

/// A iterator over the remaining arguments, consuming the parser.
///
/// Created by [`Options::into_positionals`]. Arguments are yielded verbatim, even when they look
/// like options.
#[derive(Clone, Debug)]
pub struct IntoPositionals<A: Argument, I> {
    first: Option<A>,
    opts: Options<A, I>,
}

impl<A, I> IntoPositionals<A, I>
where
    A: Argument,
    I: Iterator<Item = A>,
{
    pub(crate) fn new(first: Option<A>, opts: Options<A, I>) -> Self {
        IntoPositionals { first, opts }
    }
}

impl<A, I> Iterator for IntoPositionals<A, I>
where
    A: Argument,
    I: Iterator<Item = A>,
{
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.first.take().or_else(|| self.opts.next_verbatim())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        size_hint(self.first.is_some(), self.opts.size_hint())
    }
}

impl<A, I> FusedIterator for IntoPositionals<A, I>
where
    A: Argument,
    I: Iterator<Item = A>,
{
}

#[inline(always)]
fn size_hint(first: bool, (lower, upper): (usize, Option<usize>)) -> (usize, Option<usize>) {
    let first = usize::from(first);
    (
        lower.saturating_add(first),
        upper.and_then(|upper| upper.checked_add(first)),
    )
}
