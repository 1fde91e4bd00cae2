//! In-memory `users` table with a fixed-width row layout.
//!
//! Rows are packed back to back into 4 KiB pages. A page is allocated the first
//! time a row lands on it, and the table refuses rows once every page is full.
//! Nothing here is written to disk.

use bytes::{Buf, BufMut, BytesMut};
use thiserror::Error;

pub const ID_SIZE: usize = 8;
pub const USERNAME_SIZE: usize = 32;
pub const EMAIL_SIZE: usize = 255;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 128;
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("no space left in table (max rows: {max_rows})")]
    TableFull { max_rows: usize },
    #[error("{field} is {len} bytes, at most {max} fit")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("row needs {size} bytes, got {0}", size = ROW_SIZE)]
    ShortRow(usize),
    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub id: u64,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Row {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Appends exactly `ROW_SIZE` bytes to `buf`: little-endian id, then the
    /// zero-padded username and email fields. Nothing is written on error.
    pub fn serialize(&self, buf: &mut BytesMut) -> Result<(), TableError> {
        check_width("username", &self.username, USERNAME_SIZE)?;
        check_width("email", &self.email, EMAIL_SIZE)?;

        buf.reserve(ROW_SIZE);
        buf.put_u64_le(self.id);
        put_padded(buf, self.username.as_bytes(), USERNAME_SIZE);
        put_padded(buf, self.email.as_bytes(), EMAIL_SIZE);
        Ok(())
    }

    pub fn deserialize(mut buf: &[u8]) -> Result<Self, TableError> {
        if buf.len() < ROW_SIZE {
            return Err(TableError::ShortRow(buf.len()));
        }
        let id = buf.get_u64_le();
        let username = take_padded(&mut buf, USERNAME_SIZE, "username")?;
        let email = take_padded(&mut buf, EMAIL_SIZE, "email")?;
        Ok(Row { id, username, email })
    }
}

fn check_width(field: &'static str, value: &str, max: usize) -> Result<(), TableError> {
    if value.len() > max {
        return Err(TableError::FieldTooLong {
            field,
            len: value.len(),
            max,
        });
    }
    Ok(())
}

fn put_padded(buf: &mut BytesMut, bytes: &[u8], width: usize) {
    buf.put_slice(bytes);
    buf.put_bytes(0, width - bytes.len());
}

fn take_padded(buf: &mut &[u8], width: usize, field: &'static str) -> Result<String, TableError> {
    let data: &[u8] = *buf;
    let (raw, rest) = data.split_at(width);
    *buf = rest;

    let end = raw.iter().position(|&b| b == 0).unwrap_or(width);
    String::from_utf8(raw[..end].to_vec()).map_err(|_| TableError::InvalidUtf8(field))
}

#[derive(Debug)]
pub struct Table {
    pages: Vec<Option<BytesMut>>,
    row_count: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Table {
            pages: vec![None; TABLE_MAX_PAGES],
            row_count: 0,
        }
    }

    pub fn insert(&mut self, row: &Row) -> Result<(), TableError> {
        if self.row_count >= TABLE_MAX_ROWS {
            return Err(TableError::TableFull {
                max_rows: TABLE_MAX_ROWS,
            });
        }

        let page = self.pages[self.row_count / ROWS_PER_PAGE]
            .get_or_insert_with(|| BytesMut::with_capacity(PAGE_SIZE));
        row.serialize(page)?;
        self.row_count += 1;
        Ok(())
    }

    pub fn get(&self, row_number: usize) -> Result<Option<Row>, TableError> {
        if row_number >= self.row_count {
            return Ok(None);
        }
        let Some(page) = &self.pages[row_number / ROWS_PER_PAGE] else {
            return Ok(None);
        };
        let offset = (row_number % ROWS_PER_PAGE) * ROW_SIZE;
        Row::deserialize(&page[offset..offset + ROW_SIZE]).map(Some)
    }

    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Pages that have had at least one row written to them.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.is_some()).count()
    }
}
