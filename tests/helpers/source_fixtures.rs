//! Common PHP source fixtures for tests.

pub const SERVICE_TEST: &str = r#"<?php

namespace Tests\Unit\App;

class ExampleTest extends TestCase
{
    public function testExample()
    {
        $mock = $this->createMock(SomeService::class);
        $result = new \App\Entity\User();
    }
}
"#;

pub const SERVICE_TEST_FIXED: &str = r#"<?php

namespace Tests\Unit\App;
use App\SomeService;

class ExampleTest extends TestCase
{
    public function testExample()
    {
        $mock = $this->createMock(SomeService::class);
        $result = new \App\Entity\User();
    }
}
"#;

pub const SERVICE_TEST_IMPORTED: &str = r#"<?php

namespace Tests\Unit\App;

use App\SomeService;

class ExampleTest extends TestCase
{
    public function testExample()
    {
        $mock = $this->createMock(SomeService::class);
    }
}
"#;

/// Every usage form in one unit: instantiation, static access, catch,
/// parameter type and return type.
pub const ALL_USAGE_FORMS: &str = r#"<?php
namespace Tests\Unit\App;

class T
{
    public function run(D $d): E
    {
        try {
            $a = new A();
            B::make();
        } catch (C $e) {
        }
    }
}
"#;

pub const EXISTING_IMPORTS: &str = r#"<?php
namespace Tests\Unit\App;
use Foo\Bar;
use Foo\Baz;

class T
{
    public function run()
    {
        new Qux();
        Bar::make();
    }
}
"#;

pub const FULLY_QUALIFIED_ONLY: &str = r#"<?php
namespace Tests\Unit\App;

class T
{
    public function run(\App\Param $p): \App\Result
    {
        $a = new \App\Foo();
        \App\Bar::make();
        try {
        } catch (\App\Failure $e) {
        }
    }
}
"#;
