/*!
# MCL Commands

Every line you type is one command. Letters are upper-cased before the
command is read, except for a name written right after a `$`, so
`ini $count 1` and `INI $count 1` are the same command and `$count` and
`$COUNT` are different variables. The first word picks the command;
everything after it is that command's arguments.

## `SUM <expr>,<expr>` and `SYB <expr>,<expr>`
Print the sum or the difference of two values. A value is a decimal
number or a variable written as `$NAME`. The comma is optional. A missing
or unreadable value counts as zero and a variable that was never
initialized counts as zero after an error is shown.
```text
MCL> SUM 3,4
7
MCL> SYB 10,4
6
```

## `INI $<var> [value]`
Create a variable or change its value. Without a value the variable is
set to zero. At most 256 variables can exist and names are limited to
31 letters, digits and underbars.
```text
MCL> INI $A 10
Variable $A initialized to 10
MCL> SUM $A,5
15
```

## `LIST`
`LIST` shows different reports depending on where its `$` marks and
numbers appear.

| Form | Report |
|---|---|
| `LIST $INF` | operating system, time and interpreter state |
| `LIST $$,T` | every variable in the order it was created |
| `LIST $$,0` | the lines of the loaded program |
| `LIST $$` | `.mcl` and `.txt` files in the current directory |
| `LIST 1,$` | subdirectories of the current directory |
| `LIST $,1` | mounted filesystems |
| `LIST $,2` | the library list |

Anything else prints this table.

## `LD 0,$<filename>`
Load a program. Each line of the file becomes one program line, numbered
10, 20, 30 and so on. Only the first 100 lines are kept. The previous
program is replaced. `LD $$,<disk>` is recognized but disks are not
available in this version.

## `SAVE [filename]`
Write the variables to a file, `mcl_state.sav` unless a name is given.
The file holds one `INI` command per variable, so loading it and running
it restores the variables. The loaded program is recorded only as
comments and is not restored.

## `ED $NUM<line>`
Show one line of the loaded program.
```text
MCL> ED $NUM20
20 PRINT WORLD
```

## `$RUN`
Run the loaded program from the top. Program lines understand two
commands: `PRINT <text>` shows the text and `INI` works as above. Any
other line is reported and skipped. There are no jumps or loops.
```text
MCL> LD 0,$hello.mcl
Program loaded: hello.mcl (1 lines)
MCL> $RUN
Running program: hello.mcl
Executing line 10: PRINT HELLO
OUTPUT: HELLO
Program execution completed
```

## `HELP`, `?`, `EXIT`, `QUIT`
`HELP` or `?` lists the commands. `EXIT` or `QUIT` leaves MCL, as does
CTRL-D.

*/
