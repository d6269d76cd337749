mod find_by_index;
mod insert;
mod query_pk;
mod scan;

use super::{Memory, Table};
use cinder_core::{
    driver::{operation, Response},
    Result,
};
