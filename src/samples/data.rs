// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
// Generated by `kick generate`. Do not edit by hand; regenerate from the
// bank manifest instead.

static SAMPLE01: &[u8] = include_bytes!("sample01.pcm");
static SAMPLE02: &[u8] = include_bytes!("sample02.pcm");
static SAMPLE03: &[u8] = include_bytes!("sample03.pcm");
static SAMPLE04: &[u8] = include_bytes!("sample04.pcm");
static SAMPLE05: &[u8] = include_bytes!("sample05.pcm");
static SAMPLE06: &[u8] = include_bytes!("sample06.pcm");
static SAMPLE07: &[u8] = include_bytes!("sample07.pcm");
static SAMPLE08: &[u8] = include_bytes!("sample08.pcm");

/// The bank table. Index order matches the manifest slot order.
pub(super) static TABLE: [&[u8]; 8] = [
    SAMPLE01, SAMPLE02, SAMPLE03, SAMPLE04, SAMPLE05, SAMPLE06, SAMPLE07, SAMPLE08,
];
